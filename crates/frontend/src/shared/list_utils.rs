/// List helpers shared by every table page: client-side sort, text filter
/// and the header sort indicator.
use std::cmp::Ordering;

/// Types that can be ordered by a named column.
pub trait Sortable {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering;
}

/// Types that can be matched against the free-text search box.
pub trait Searchable {
    fn matches_filter(&self, filter: &str) -> bool;
}

pub fn sort_list<T: Sortable>(items: &mut Vec<T>, field: &str, ascending: bool) {
    items.sort_by(|a, b| {
        let cmp = a.compare_by_field(b, field);
        if ascending {
            cmp
        } else {
            cmp.reverse()
        }
    });
}

pub fn filter_list<T: Searchable>(items: Vec<T>, filter: &str) -> Vec<T> {
    let filter = filter.trim().to_lowercase();
    if filter.is_empty() {
        return items;
    }
    items
        .into_iter()
        .filter(|item| item.matches_filter(&filter))
        .collect()
}

pub fn get_sort_indicator(current_field: &str, field: &str, ascending: bool) -> &'static str {
    if current_field == field {
        if ascending {
            " ▲"
        } else {
            " ▼"
        }
    } else {
        " ⇅"
    }
}

pub fn get_sort_class(current_field: &str, field: &str) -> &'static str {
    if current_field == field {
        "table__sort table__sort--active"
    } else {
        "table__sort"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fila {
        nombre: String,
        monto: f64,
    }

    impl Sortable for Fila {
        fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
            match field {
                "monto" => self.monto.partial_cmp(&other.monto).unwrap_or(Ordering::Equal),
                _ => self.nombre.to_lowercase().cmp(&other.nombre.to_lowercase()),
            }
        }
    }

    impl Searchable for Fila {
        fn matches_filter(&self, filter: &str) -> bool {
            self.nombre.to_lowercase().contains(filter)
        }
    }

    fn filas() -> Vec<Fila> {
        vec![
            Fila { nombre: "corte".into(), monto: 150.0 },
            Fila { nombre: "Barba".into(), monto: 90.0 },
            Fila { nombre: "tinte".into(), monto: 400.0 },
        ]
    }

    #[test]
    fn ordena_por_campo_ignorando_mayusculas() {
        let mut items = filas();
        sort_list(&mut items, "nombre", true);
        assert_eq!(items[0].nombre, "Barba");
        sort_list(&mut items, "monto", false);
        assert_eq!(items[0].monto, 400.0);
    }

    #[test]
    fn filtra_sin_distincion_de_caso() {
        let items = filter_list(filas(), "BAR");
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].nombre, "Barba");
    }

    #[test]
    fn filtro_vacio_devuelve_todo() {
        assert_eq!(filter_list(filas(), "  ").len(), 3);
    }
}
