//! Static menu descriptor and the pure visibility/highlight rules.
//!
//! The sidebar renders whatever these functions return for the resolved
//! permission set and the current path. Nothing here touches the DOM, so the
//! whole gate is unit-testable.

use std::collections::HashSet;

use crate::system::auth::capability::{tiene_capacidad, Combinador};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntradaMenu {
    pub ruta: &'static str,
    pub etiqueta: &'static str,
    pub icono: &'static str,
    /// Keys that unlock the entry, OR semantics. Empty slice = ungated.
    pub claves: &'static [&'static str],
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrupoMenu {
    pub id: &'static str,
    pub etiqueta: &'static str,
    pub icono: &'static str,
    pub entradas: Vec<EntradaMenu>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemMenu {
    Entrada(EntradaMenu),
    Grupo(GrupoMenu),
}

const fn entrada(
    ruta: &'static str,
    etiqueta: &'static str,
    icono: &'static str,
    claves: &'static [&'static str],
) -> EntradaMenu {
    EntradaMenu {
        ruta,
        etiqueta,
        icono,
        claves,
    }
}

/// The full menu, before gating. Order matches the sidebar top to bottom.
pub fn menu_principal() -> Vec<ItemMenu> {
    vec![
        ItemMenu::Entrada(entrada("/", "Inicio", "home", &[])),
        ItemMenu::Entrada(entrada(
            "/usuarios",
            "Usuarios",
            "users",
            &["gestionar_usuarios", "ver_usuarios"],
        )),
        ItemMenu::Grupo(GrupoMenu {
            id: "acceso",
            etiqueta: "Control de acceso",
            icono: "shield",
            entradas: vec![
                entrada("/roles", "Roles", "key", &["gestionar_roles", "ver_roles"]),
                entrada(
                    "/permisos",
                    "Permisos",
                    "lock",
                    &["gestionar_permisos", "ver_permisos"],
                ),
            ],
        }),
        ItemMenu::Entrada(entrada(
            "/servicios",
            "Servicios",
            "scissors",
            &["gestionar_servicios", "ver_servicios"],
        )),
        ItemMenu::Entrada(entrada(
            "/productos",
            "Productos",
            "package",
            &["gestionar_productos", "ver_productos"],
        )),
        ItemMenu::Entrada(entrada(
            "/personal",
            "Personal",
            "contact",
            &["gestionar_personal", "ver_personal"],
        )),
        ItemMenu::Entrada(entrada(
            "/citas",
            "Citas",
            "calendar",
            &["gestionar_citas", "ver_citas"],
        )),
        ItemMenu::Entrada(entrada(
            "/ventas",
            "Ventas",
            "cash",
            &["gestionar_ventas", "ver_ventas"],
        )),
        ItemMenu::Entrada(entrada(
            "/gastos",
            "Gastos",
            "receipt",
            &["gestionar_gastos", "ver_gastos"],
        )),
        ItemMenu::Entrada(entrada(
            "/comisiones",
            "Comisiones",
            "percent",
            &["gestionar_comisiones", "ver_comisiones"],
        )),
        ItemMenu::Entrada(entrada("/reportes", "Reportes", "bar-chart", &["ver_reportes"])),
        ItemMenu::Entrada(entrada("/auditoria", "Auditoría", "list", &["ver_auditoria"])),
        ItemMenu::Entrada(entrada(
            "/mensajes",
            "Mensajes",
            "message-square",
            &["gestionar_mensajes", "ver_mensajes"],
        )),
    ]
}

pub fn entrada_visible(claves: &HashSet<String>, entrada: &EntradaMenu) -> bool {
    tiene_capacidad(claves, entrada.claves, Combinador::Cualquiera)
}

/// A group stands or falls with its children.
pub fn grupo_visible(claves: &HashSet<String>, grupo: &GrupoMenu) -> bool {
    grupo.entradas.iter().any(|e| entrada_visible(claves, e))
}

/// Gate the static menu against a permission set. Groups keep only their
/// visible children and disappear entirely when none survive.
pub fn items_visibles(claves: &HashSet<String>) -> Vec<ItemMenu> {
    menu_principal()
        .into_iter()
        .filter_map(|item| match item {
            ItemMenu::Entrada(e) => entrada_visible(claves, &e).then_some(ItemMenu::Entrada(e)),
            ItemMenu::Grupo(mut g) => {
                g.entradas.retain(|e| entrada_visible(claves, e));
                (!g.entradas.is_empty()).then_some(ItemMenu::Grupo(g))
            }
        })
        .collect()
}

/// Highlight rule: exact match, or a sub-route of the entry (`/roles/5`
/// keeps `/roles` highlighted). The root is exact-only so it does not light
/// up for every path.
pub fn entrada_activa(ruta_actual: &str, ruta: &str) -> bool {
    if ruta == "/" {
        return ruta_actual == "/";
    }
    ruta_actual == ruta || ruta_actual.starts_with(&format!("{}/", ruta))
}

/// A group starts expanded when the current path sits under one of its
/// children; afterwards only the user toggles it.
pub fn grupo_abierto_inicial(ruta_actual: &str, grupo: &GrupoMenu) -> bool {
    grupo
        .entradas
        .iter()
        .any(|e| entrada_activa(ruta_actual, e.ruta))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn conjunto(claves: &[&str]) -> HashSet<String> {
        claves.iter().map(|c| c.to_string()).collect()
    }

    fn rutas_visibles(claves: &HashSet<String>) -> Vec<&'static str> {
        items_visibles(claves)
            .iter()
            .flat_map(|item| match item {
                ItemMenu::Entrada(e) => vec![e.ruta],
                ItemMenu::Grupo(g) => g.entradas.iter().map(|e| e.ruta).collect(),
            })
            .collect()
    }

    fn grupo_acceso() -> GrupoMenu {
        menu_principal()
            .into_iter()
            .find_map(|item| match item {
                ItemMenu::Grupo(g) if g.id == "acceso" => Some(g),
                _ => None,
            })
            .expect("el menú define el grupo de control de acceso")
    }

    #[test]
    fn conjunto_vacio_deja_solo_lo_no_gateado() {
        let visibles = rutas_visibles(&conjunto(&[]));
        assert_eq!(visibles, vec!["/"]);
    }

    #[test]
    fn ver_y_gestionar_desbloquean_por_igual() {
        // Semántica OR idempotente: cada clave abre la entrada por sí sola.
        let con_ver = rutas_visibles(&conjunto(&["ver_usuarios"]));
        assert!(con_ver.contains(&"/usuarios"));

        let con_gestionar = rutas_visibles(&conjunto(&["gestionar_usuarios"]));
        assert!(con_gestionar.contains(&"/usuarios"));

        assert!(!con_ver.contains(&"/ventas"));
    }

    #[test]
    fn grupo_visible_con_un_solo_hijo() {
        let items = items_visibles(&conjunto(&["ver_permisos"]));
        let grupo = items
            .iter()
            .find_map(|item| match item {
                ItemMenu::Grupo(g) => Some(g),
                _ => None,
            })
            .expect("grupo visible con un hijo desbloqueado");
        assert_eq!(grupo.entradas.len(), 1);
        assert_eq!(grupo.entradas[0].ruta, "/permisos");
    }

    #[test]
    fn grupo_sin_hijos_visibles_desaparece() {
        let items = items_visibles(&conjunto(&["ver_ventas"]));
        assert!(items
            .iter()
            .all(|item| !matches!(item, ItemMenu::Grupo(_))));
    }

    #[test]
    fn cada_entrada_exige_pertenencia_de_clave() {
        // Propiedad 1: visible ⟺ alguna clave requerida está en el conjunto.
        let claves = conjunto(&["ver_gastos", "gestionar_citas"]);
        let visibles = rutas_visibles(&claves);
        for item in menu_principal() {
            let entradas = match item {
                ItemMenu::Entrada(e) => vec![e],
                ItemMenu::Grupo(g) => g.entradas,
            };
            for e in entradas {
                let esperada =
                    e.claves.is_empty() || e.claves.iter().any(|c| claves.contains(*c));
                assert_eq!(visibles.contains(&e.ruta), esperada, "ruta {}", e.ruta);
            }
        }
    }

    #[test]
    fn subruta_mantiene_entrada_activa() {
        assert!(entrada_activa("/roles/5", "/roles"));
        assert!(entrada_activa("/roles", "/roles"));
        assert!(!entrada_activa("/rolesx", "/roles"));
        assert!(!entrada_activa("/permisos", "/roles"));
    }

    #[test]
    fn raiz_solo_activa_exacta() {
        assert!(entrada_activa("/", "/"));
        assert!(!entrada_activa("/ventas", "/"));
    }

    #[test]
    fn grupo_arranca_abierto_bajo_subruta_de_hijo() {
        let grupo = grupo_acceso();
        assert!(grupo_abierto_inicial("/roles/5", &grupo));
        assert!(grupo_abierto_inicial("/permisos", &grupo));
        assert!(!grupo_abierto_inicial("/ventas", &grupo));
        assert!(!grupo_abierto_inicial("/", &grupo));
    }
}
