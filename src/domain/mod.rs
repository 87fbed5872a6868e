// Domain layer: the validated entities and the catalog that owns them.
// Entities never perform I/O; describe_* only builds strings.

pub mod device;
pub mod locale;
pub mod model;
pub mod ports;
pub mod radio;
pub mod television;
