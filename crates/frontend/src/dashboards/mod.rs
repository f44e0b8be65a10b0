pub mod d100_resumen;
pub mod d101_reportes;
