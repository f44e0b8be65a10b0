//! Single definition of the permission-check semantics.
//!
//! Every screen and menu entry goes through [`tiene_capacidad`] instead of
//! re-deriving `contains` checks locally. A "gestionar" key does not imply
//! the matching "ver" key; both unlock independently via [`Combinador::Cualquiera`].

use std::collections::HashSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Combinador {
    /// True if ANY required key is present (menu/OR semantics).
    Cualquiera,
    /// True only if ALL required keys are present.
    Todas,
}

/// Check a permission-key set against the keys a capability requires.
///
/// An empty `requeridas` slice means the capability is ungated.
pub fn tiene_capacidad(claves: &HashSet<String>, requeridas: &[&str], comb: Combinador) -> bool {
    if requeridas.is_empty() {
        return true;
    }
    match comb {
        Combinador::Cualquiera => requeridas.iter().any(|c| claves.contains(*c)),
        Combinador::Todas => requeridas.iter().all(|c| claves.contains(*c)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn conjunto(claves: &[&str]) -> HashSet<String> {
        claves.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn sin_requisitos_siempre_pasa() {
        assert!(tiene_capacidad(&conjunto(&[]), &[], Combinador::Cualquiera));
        assert!(tiene_capacidad(&conjunto(&[]), &[], Combinador::Todas));
    }

    #[test]
    fn cualquiera_con_una_clave_basta() {
        let claves = conjunto(&["ver_usuarios"]);
        assert!(tiene_capacidad(
            &claves,
            &["gestionar_usuarios", "ver_usuarios"],
            Combinador::Cualquiera
        ));
    }

    #[test]
    fn gestionar_tambien_desbloquea_por_si_sola() {
        let claves = conjunto(&["gestionar_usuarios"]);
        assert!(tiene_capacidad(
            &claves,
            &["gestionar_usuarios", "ver_usuarios"],
            Combinador::Cualquiera
        ));
    }

    #[test]
    fn conjunto_vacio_no_desbloquea_nada_gateado() {
        let claves = conjunto(&[]);
        assert!(!tiene_capacidad(
            &claves,
            &["ver_reportes"],
            Combinador::Cualquiera
        ));
    }

    #[test]
    fn todas_exige_el_conjunto_completo() {
        let claves = conjunto(&["ver_ventas"]);
        assert!(!tiene_capacidad(
            &claves,
            &["ver_ventas", "gestionar_ventas"],
            Combinador::Todas
        ));
        let claves = conjunto(&["ver_ventas", "gestionar_ventas"]);
        assert!(tiene_capacidad(
            &claves,
            &["ver_ventas", "gestionar_ventas"],
            Combinador::Todas
        ));
    }

    #[test]
    fn claves_desconocidas_se_ignoran() {
        let claves = conjunto(&["otra_clave", "ver_citas"]);
        assert!(tiene_capacidad(&claves, &["ver_citas"], Combinador::Cualquiera));
        assert!(!tiene_capacidad(&claves, &["ver_gastos"], Combinador::Cualquiera));
    }
}
