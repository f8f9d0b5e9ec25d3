use crate::domain::{Birthday, Name, Phone};
use crate::error::CoreError;
use serde::{Deserialize, Serialize};

/// One contact: a name, its phones in insertion order, and an optional
/// birthday. Phone values are unique within a record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    name: Name,
    #[serde(default)]
    phones: Vec<Phone>,
    #[serde(default)]
    birthday: Option<Birthday>,
}

impl Record {
    pub fn new(name: Name) -> Self {
        Self {
            name,
            phones: Vec::new(),
            birthday: None,
        }
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<Birthday> {
        self.birthday
    }

    /// Appends a phone; adding a number that is already present is a no-op.
    pub fn add_phone(&mut self, phone: Phone) {
        if !self.phones.contains(&phone) {
            self.phones.push(phone);
        }
    }

    pub fn find_phone(&self, raw: &str) -> Option<&Phone> {
        self.phones.iter().find(|phone| phone.as_str() == raw)
    }

    /// Replaces `old` with `new` in place. If `new` already exists elsewhere
    /// in the record the pair collapses to a single entry.
    pub fn edit_phone(&mut self, old: &str, new: Phone) -> Result<(), CoreError> {
        let index = self
            .phones
            .iter()
            .position(|phone| phone.as_str() == old)
            .ok_or_else(|| CoreError::PhoneNotFound(old.to_string()))?;
        if self
            .phones
            .iter()
            .any(|phone| *phone == new && phone.as_str() != old)
        {
            self.phones.remove(index);
        } else {
            self.phones[index] = new;
        }
        Ok(())
    }

    pub fn remove_phone(&mut self, raw: &str) -> Result<Phone, CoreError> {
        let index = self
            .phones
            .iter()
            .position(|phone| phone.as_str() == raw)
            .ok_or_else(|| CoreError::PhoneNotFound(raw.to_string()))?;
        Ok(self.phones.remove(index))
    }

    /// Sets the birthday, overwriting any prior value.
    pub fn set_birthday(&mut self, birthday: Birthday) {
        self.birthday = Some(birthday);
    }
}
