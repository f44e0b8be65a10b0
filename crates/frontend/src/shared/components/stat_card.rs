use crate::shared::date_utils::formato_moneda;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatoValor {
    Moneda,
    Entero,
}

fn formatear(valor: f64, formato: FormatoValor) -> String {
    match formato {
        FormatoValor::Moneda => formato_moneda(valor),
        FormatoValor::Entero => format!("{}", valor as i64),
    }
}

/// Indicator card for the dashboard header row.
#[component]
pub fn StatCard(
    /// Label above the value
    label: &'static str,
    icon_name: &'static str,
    /// None = still loading
    #[prop(into)]
    valor: Signal<Option<f64>>,
    formato: FormatoValor,
    /// Change vs. previous period, in percent
    #[prop(into, optional)]
    cambio: Signal<Option<f64>>,
) -> impl IntoView {
    let texto = move || match valor.get() {
        Some(v) => formatear(v, formato),
        None => "—".to_string(),
    };

    let cambio_view = move || {
        cambio.get().map(|pct| {
            let (flecha, cls) = if pct > 0.5 {
                ("\u{2191}", "stat-card__change stat-card__change--up")
            } else if pct < -0.5 {
                ("\u{2193}", "stat-card__change stat-card__change--down")
            } else {
                ("", "stat-card__change stat-card__change--flat")
            };
            let texto = format!("{}{:.1}%", flecha, pct.abs());
            view! { <span class=cls>{texto}</span> }
        })
    };

    view! {
        <div class="stat-card">
            <div class="stat-card__icon">{icon(icon_name)}</div>
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">
                    {texto}
                    {cambio_view}
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formatea_segun_tipo() {
        assert_eq!(formatear(1234.5, FormatoValor::Moneda), "$1,234.50");
        assert_eq!(formatear(17.0, FormatoValor::Entero), "17");
    }
}
