pub use super::deleted_message::Entity as DeletedMessage;
pub use super::edited_message::Entity as EditedMessage;
pub use super::guild::Entity as Guild;
