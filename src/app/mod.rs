pub mod contact;
pub mod enrollment;
