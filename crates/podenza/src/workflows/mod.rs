pub mod solicitudes;
pub mod vitrina;
