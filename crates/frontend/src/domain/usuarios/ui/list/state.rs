use contracts::domain::usuarios::Usuario;
use leptos::prelude::*;

#[derive(Clone, Debug)]
pub struct UsuariosListState {
    pub items: Vec<Usuario>,
    pub search_query: String,
    pub sort_field: String,
    pub sort_ascending: bool,
    pub page: usize,
    pub page_size: usize,
    pub total_count: usize,
    pub total_pages: usize,
    pub is_loaded: bool,
}

impl Default for UsuariosListState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            search_query: String::new(),
            sort_field: "nombre".to_string(),
            sort_ascending: true,
            page: 0,
            page_size: 25,
            total_count: 0,
            total_pages: 1,
            is_loaded: false,
        }
    }
}

pub fn create_state() -> RwSignal<UsuariosListState> {
    RwSignal::new(UsuariosListState::default())
}
