//! User-facing notices shown by the views

pub const BLUEPRINT_CREATED: &str = "Blueprint created";
pub const ENTER_BLUEPRINT_NAME: &str = "Enter blueprint name";
pub const CONTRACT_CREATED: &str = "Contract created";
pub const FILL_ALL_FIELDS: &str = "Fill all fields";
pub const BLUEPRINT_GONE: &str = "Selected blueprint no longer exists";
pub const CONTRACT_SAVED: &str = "Contract saved successfully";
pub const CONTRACT_LOCKED: &str = "Contract is locked and cannot be edited";
pub const NO_CONTRACTS: &str = "No contracts created yet";
pub const SIGNATURE_HINT: &str = "Type signer name";
