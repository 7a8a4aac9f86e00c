// 👤 Client Entity - identity fields of an account holder
//
// A client is shared, not copied: several accounts may point at the same
// `SharedClient`, and a rename is visible through all of them.

use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::rc::Rc;

/// Handle held by every account owned by the same client
pub type SharedClient = Rc<RefCell<Client>>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Client {
    /// Stable identity (UUID)
    id: String,

    name: String,

    /// National identification number (e.g. CPF "123.456.789-00")
    national_id: String,

    phone: String,
}

impl Client {
    pub fn new(
        name: impl Into<String>,
        national_id: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        Client {
            id: uuid::Uuid::new_v4().to_string(),
            name: name.into(),
            national_id: national_id.into(),
            phone: phone.into(),
        }
    }

    /// Build the client and wrap it for sharing between accounts
    pub fn shared(
        name: impl Into<String>,
        national_id: impl Into<String>,
        phone: impl Into<String>,
    ) -> SharedClient {
        Rc::new(RefCell::new(Client::new(name, national_id, phone)))
    }

    pub fn into_shared(self) -> SharedClient {
        Rc::new(RefCell::new(self))
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn national_id(&self) -> &str {
        &self.national_id
    }

    pub fn set_national_id(&mut self, national_id: impl Into<String>) {
        self.national_id = national_id.into();
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn set_phone(&mut self, phone: impl Into<String>) {
        self.phone = phone.into();
    }
}
