//! Per-entity wire contracts for the collections with create/edit forms.
//!
//! Mutation endpoints follow one family per entity:
//! `POST /agregar_<entity>`, `PUT /editar_<entity>/<id>`,
//! `DELETE /eliminar_<entity>/<id>`.

pub mod a001_categoria;
pub mod a002_proveedor;
pub mod a003_producto;
