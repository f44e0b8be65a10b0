pub mod confirm_dialog;
pub mod pagination_controls;
pub mod stat_card;
