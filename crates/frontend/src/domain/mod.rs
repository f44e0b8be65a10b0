pub mod auditoria;
pub mod citas;
pub mod comisiones;
pub mod gastos;
pub mod mensajes;
pub mod permisos;
pub mod personal;
pub mod productos;
pub mod roles;
pub mod servicios;
pub mod usuarios;
pub mod ventas;
