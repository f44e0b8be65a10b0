/// Date and time formatting helpers.
///
/// The backend ships ISO-8601 strings; the UI shows DD/MM/YYYY.

/// "2025-03-15T14:02:26.123Z" -> "15/03/2025 14:02"
pub fn formato_fecha_hora(valor: &str) -> String {
    if let Some((fecha, hora)) = valor.split_once('T') {
        if let Some((anio, resto)) = fecha.split_once('-') {
            if let Some((mes, dia)) = resto.split_once('-') {
                let hora = hora.split('.').next().unwrap_or(hora);
                let hora = hora.trim_end_matches('Z');
                // Recorta los segundos sólo si vienen (HH:MM:SS -> HH:MM)
                let hora_corta = if hora.matches(':').count() >= 2 {
                    hora.rsplit_once(':').map(|(hm, _)| hm).unwrap_or(hora)
                } else {
                    hora
                };
                return format!("{}/{}/{} {}", dia, mes, anio, hora_corta);
            }
        }
    }
    valor.to_string()
}

/// "2025-03-15" or "2025-03-15T14:02:26Z" -> "15/03/2025"
pub fn formato_fecha(valor: &str) -> String {
    let fecha = valor.split('T').next().unwrap_or(valor);
    if let Some((anio, resto)) = fecha.split_once('-') {
        if let Some((mes, dia)) = resto.split_once('-') {
            return format!("{}/{}/{}", dia, mes, anio);
        }
    }
    valor.to_string()
}

/// Money with two decimals and `$` prefix: 1234.5 -> "$1,234.50"
pub fn formato_moneda(valor: f64) -> String {
    let negativo = valor < 0.0;
    let abs = valor.abs();
    let entero = abs.trunc() as i64;
    let centavos = ((abs - entero as f64) * 100.0).round() as i64;
    let mut miles = String::new();
    let digitos = entero.to_string();
    for (i, ch) in digitos.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            miles.push(',');
        }
        miles.push(ch);
    }
    let miles: String = miles.chars().rev().collect();
    let signo = if negativo { "-" } else { "" };
    format!("{}${}.{:02}", signo, miles, centavos)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_formato_fecha_hora() {
        assert_eq!(
            formato_fecha_hora("2025-03-15T14:02:26.123Z"),
            "15/03/2025 14:02"
        );
        assert_eq!(formato_fecha_hora("2025-12-31T23:59:59Z"), "31/12/2025 23:59");
    }

    #[test]
    fn test_formato_fecha() {
        assert_eq!(formato_fecha("2025-03-15"), "15/03/2025");
        assert_eq!(formato_fecha("2025-03-15T14:02:26Z"), "15/03/2025");
    }

    #[test]
    fn test_valor_invalido_pasa_sin_tocar() {
        assert_eq!(formato_fecha_hora("invalid"), "invalid");
        assert_eq!(formato_fecha("invalid"), "invalid");
    }

    #[test]
    fn test_formato_moneda() {
        assert_eq!(formato_moneda(1234.5), "$1,234.50");
        assert_eq!(formato_moneda(0.0), "$0.00");
        assert_eq!(formato_moneda(-75.0), "-$75.00");
        assert_eq!(formato_moneda(1000000.0), "$1,000,000.00");
    }
}
