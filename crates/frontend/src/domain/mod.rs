pub mod a001_categoria;
pub mod a002_proveedor;
pub mod a003_producto;
pub mod a004_compras;
pub mod a005_ventas;
pub mod a006_movimientos;
