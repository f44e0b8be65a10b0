use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Producto {
    pub id: i64,
    pub nombre: String,
    pub descripcion: Option<String>,
    pub precio: f64,
    pub stock: i32,
    pub activo: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateProductoDto {
    pub nombre: String,
    pub descripcion: Option<String>,
    pub precio: f64,
    pub stock: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateProductoDto {
    pub id: i64,
    pub nombre: String,
    pub descripcion: Option<String>,
    pub precio: f64,
    pub stock: i32,
    pub activo: bool,
}
