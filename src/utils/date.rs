use chrono::{Datelike, NaiveDate};

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Parse a date cell from the workbook.
///
/// The branch tabs use day-first Brazilian dates ("15/03/2024"), but cells
/// occasionally arrive ISO-formatted or as a raw Excel serial number
/// depending on how the cell was typed.
pub fn parse_flex_date(raw: &str) -> Option<NaiveDate> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }

    for fmt in ["%d/%m/%Y", "%d/%m/%y", "%Y-%m-%d"] {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return Some(d);
        }
    }

    // serial do Excel (dias desde 1899-12-30)
    if let Ok(serial) = s.parse::<f64>() {
        return excel_serial_to_date(serial);
    }

    None
}

/// Convert an Excel date serial into a chrono date.
/// Excel counts days from 1899-12-30 (the off-by-two Lotus epoch).
pub fn excel_serial_to_date(serial: f64) -> Option<NaiveDate> {
    if serial < 1.0 {
        return None;
    }
    let epoch = NaiveDate::from_ymd_opt(1899, 12, 30)?;
    epoch.checked_add_days(chrono::Days::new(serial.trunc() as u64))
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// Nome do mês em português, 1-based.
pub fn mes_nome(mes: u32) -> &'static str {
    match mes {
        1 => "Janeiro",
        2 => "Fevereiro",
        3 => "Março",
        4 => "Abril",
        5 => "Maio",
        6 => "Junho",
        7 => "Julho",
        8 => "Agosto",
        9 => "Setembro",
        10 => "Outubro",
        11 => "Novembro",
        12 => "Dezembro",
        _ => "?",
    }
}

/// Resolve a month CLI argument: a number ("3"), a Portuguese name
/// ("Março", case-insensitive) or "todos" for the whole year.
pub fn resolve_mes(arg: &str) -> Option<Option<u32>> {
    let s = arg.trim();
    if s.eq_ignore_ascii_case("todos") {
        return Some(None);
    }

    if let Ok(n) = s.parse::<u32>() {
        if (1..=12).contains(&n) {
            return Some(Some(n));
        }
        return None;
    }

    (1..=12).find(|m| mes_nome(*m).eq_ignore_ascii_case(s)).map(Some)
}

/// First and last calendar day covered by a commercial period
/// (the 21st of the previous month through the 20th).
pub fn janela_comercial(ano: i32, mes: u32) -> (NaiveDate, NaiveDate) {
    // mes já chega validado (1..=12) pelo resolve_mes
    let fim =
        NaiveDate::from_ymd_opt(ano, mes, 20).unwrap_or_else(|| today().with_day(20).unwrap());
    let (ano_ini, mes_ini) = if mes == 1 { (ano - 1, 12) } else { (ano, mes - 1) };
    let inicio = NaiveDate::from_ymd_opt(ano_ini, mes_ini, 21).unwrap_or(fim);
    (inicio, fim)
}

pub fn format_br(d: NaiveDate) -> String {
    d.format("%d/%m/%Y").to_string()
}
