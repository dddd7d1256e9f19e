pub mod catalog_router;
pub mod lead_router;
pub mod quotation_router;
pub mod system_router;
