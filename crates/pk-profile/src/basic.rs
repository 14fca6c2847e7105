//! Base profile data shared by every profile variant.

use std::collections::BTreeSet;

use pk_core::{Error, Result};
use pk_model::{AttributeStore, AttributeValue};

/// Identity data common to all profiles.
///
/// A `BasicProfile` is built by the collaborator that established the
/// identity. Variants such as [`crate::CommonProfile`] wrap it and add typed
/// accessors on top.
#[derive(Debug, Clone, PartialEq)]
pub struct BasicProfile {
    id: String,
    attributes: AttributeStore,
    authentication_attributes: AttributeStore,
    roles: BTreeSet<String>,
    client_name: Option<String>,
    linked_id: Option<String>,
    remember_me: bool,
}

impl BasicProfile {
    /// Creates a profile for the given identifier.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidProfileId`] if `id` is empty or whitespace.
    pub fn new(id: impl Into<String>) -> Result<Self> {
        Ok(Self {
            id: checked_id(id.into())?,
            attributes: AttributeStore::new(),
            authentication_attributes: AttributeStore::new(),
            roles: BTreeSet::new(),
            client_name: None,
            linked_id: None,
            remember_me: false,
        })
    }

    /// Gets the profile identifier.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Replaces the profile identifier.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidProfileId`] if `id` is empty or whitespace;
    /// the current identifier is kept.
    pub fn set_id(&mut self, id: impl Into<String>) -> Result<()> {
        self.id = checked_id(id.into())?;
        Ok(())
    }

    // === Attributes ===

    /// Adds an attribute.
    #[must_use]
    pub fn with_attribute(
        mut self,
        name: impl Into<String>,
        value: impl Into<AttributeValue>,
    ) -> Self {
        self.attributes.insert(name, value);
        self
    }

    /// Gets the user attributes.
    #[must_use]
    pub const fn attributes(&self) -> &AttributeStore {
        &self.attributes
    }

    /// Gets the user attributes for population.
    pub fn attributes_mut(&mut self) -> &mut AttributeStore {
        &mut self.attributes
    }

    /// Gets a single attribute.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&AttributeValue> {
        self.attributes.get(name)
    }

    /// Sets an attribute, returning the value it replaced.
    pub fn add_attribute(
        &mut self,
        name: impl Into<String>,
        value: impl Into<AttributeValue>,
    ) -> Option<AttributeValue> {
        self.attributes.insert(name, value)
    }

    /// Sets several attributes at once.
    pub fn add_attributes<I, K, V>(&mut self, attributes: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<AttributeValue>,
    {
        self.attributes.extend(attributes);
    }

    /// Removes an attribute.
    pub fn remove_attribute(&mut self, name: &str) -> Option<AttributeValue> {
        self.attributes.remove(name)
    }

    /// Checks if an attribute is set.
    #[must_use]
    pub fn contains_attribute(&self, name: &str) -> bool {
        self.attributes.contains(name)
    }

    // === Authentication attributes ===

    /// Adds an authentication attribute.
    #[must_use]
    pub fn with_authentication_attribute(
        mut self,
        name: impl Into<String>,
        value: impl Into<AttributeValue>,
    ) -> Self {
        self.authentication_attributes.insert(name, value);
        self
    }

    /// Gets the attributes describing the authentication event itself.
    #[must_use]
    pub const fn authentication_attributes(&self) -> &AttributeStore {
        &self.authentication_attributes
    }

    /// Sets an authentication attribute, returning the value it replaced.
    pub fn add_authentication_attribute(
        &mut self,
        name: impl Into<String>,
        value: impl Into<AttributeValue>,
    ) -> Option<AttributeValue> {
        self.authentication_attributes.insert(name, value)
    }

    /// Removes an authentication attribute.
    pub fn remove_authentication_attribute(&mut self, name: &str) -> Option<AttributeValue> {
        self.authentication_attributes.remove(name)
    }

    // === Roles ===

    /// Adds a role.
    #[must_use]
    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.roles.insert(role.into());
        self
    }

    /// Gets the roles in sorted order.
    #[must_use]
    pub const fn roles(&self) -> &BTreeSet<String> {
        &self.roles
    }

    /// Adds a role. Returns `false` if it was already present.
    pub fn add_role(&mut self, role: impl Into<String>) -> bool {
        self.roles.insert(role.into())
    }

    /// Adds several roles.
    pub fn add_roles<I, R>(&mut self, roles: I)
    where
        I: IntoIterator<Item = R>,
        R: Into<String>,
    {
        self.roles.extend(roles.into_iter().map(Into::into));
    }

    /// Removes a role. Returns `false` if it was not present.
    pub fn remove_role(&mut self, role: &str) -> bool {
        self.roles.remove(role)
    }

    /// Checks if the profile has a role.
    #[must_use]
    pub fn has_role(&self, role: &str) -> bool {
        self.roles.contains(role)
    }

    // === Authentication context ===

    /// Sets the name of the client that authenticated the user.
    #[must_use]
    pub fn with_client_name(mut self, client_name: impl Into<String>) -> Self {
        self.client_name = Some(client_name.into());
        self
    }

    /// Gets the name of the client that authenticated the user.
    #[must_use]
    pub fn client_name(&self) -> Option<&str> {
        self.client_name.as_deref()
    }

    /// Sets or clears the client name.
    pub fn set_client_name(&mut self, client_name: Option<String>) {
        self.client_name = client_name;
    }

    /// Gets the identifier of the account this profile is linked to.
    #[must_use]
    pub fn linked_id(&self) -> Option<&str> {
        self.linked_id.as_deref()
    }

    /// Sets or clears the linked identifier.
    pub fn set_linked_id(&mut self, linked_id: Option<String>) {
        self.linked_id = linked_id;
    }

    /// Sets whether the user asked to be remembered.
    #[must_use]
    pub const fn with_remember_me(mut self, remember_me: bool) -> Self {
        self.remember_me = remember_me;
        self
    }

    /// Checks whether the user asked to be remembered.
    #[must_use]
    pub const fn is_remember_me(&self) -> bool {
        self.remember_me
    }

    /// Sets whether the user asked to be remembered.
    pub fn set_remember_me(&mut self, remember_me: bool) {
        self.remember_me = remember_me;
    }
}

fn checked_id(id: String) -> Result<String> {
    if id.trim().is_empty() {
        return Err(Error::InvalidProfileId("id must not be blank".to_string()));
    }
    Ok(id)
}
