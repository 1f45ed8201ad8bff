//! Contract text composer.
//!
//! Maps one [`ProfessionalRecord`] to the fixed narrative template used in
//! the clinic's contract summaries. Pure and deterministic: the output is
//! fully determined by the record's field values.

use crate::record::{fields, ProfessionalRecord};

/// Exact sentinel in `ATENDIMENTO_CLÍNICO` selecting the negative clause.
pub const NAO_REALIZA: &str = "NÃO REALIZA";

/// Marker in `PARTO_NORMAL` meaning the coverage list is private-only.
const PARTO_NORMAL_PARTICULAR: &str = "REALIZA PARTO NORMAL SOMENTE PARTICULAR";

/// Marker in `PARTO_CESÁREA` meaning the coverage list is private-only.
const PARTO_CESAREA_PARTICULAR: &str = "REALIZA PARTO CESÁREA SOMENTE PARTICULAR";

/// Composes the full contract summary for one professional.
pub fn compose_contract(record: &ProfessionalRecord) -> String {
    let name = title_case(record.get(fields::NOME).unwrap_or(""));
    let specialty = record
        .get(fields::ESPECIALIDADE)
        .unwrap_or("")
        .to_lowercase();

    let mut text = format!("O Dr./Dra. {name}, especialista na área de {specialty}.\n\n");

    text.push_str(&format!(
        "Durante as consultas, realizadas em um ambiente acolhedor e profissional, \
         o Dr./Dra. {name} "
    ));
    if record.get(fields::ATENDIMENTO_CLINICO) == Some(NAO_REALIZA) {
        text.push_str("não realiza atendimento clínico. ");
    } else {
        text.push_str("realiza atendimento clínico.\n\n");
    }

    if let Some(coverage) = record.get(fields::PRE_NATAL) {
        text.push_str(&format!(
            "Para o acompanhamento pré-natal, o Dr./Dra. {name} atende nos \
             convênios: {coverage}.\n\n"
        ));
    }

    text.push_str("Uma informação importante é que ");
    match record.get(fields::PARTO_NORMAL) {
        Some(coverage) if !coverage.contains(PARTO_NORMAL_PARTICULAR) => {
            text.push_str(&format!(
                "o Dr./Dra. {name} realiza parto normal no(s) convênio(s): {coverage}, "
            ));
        }
        _ => {
            text.push_str(&format!(
                "o Dr./Dra. {name} realiza parto normal somente particular, "
            ));
        }
    }
    match record.get(fields::PARTO_CESAREA) {
        Some(coverage) if !coverage.contains(PARTO_CESAREA_PARTICULAR) => {
            text.push_str(&format!(
                "e realiza parto cesárea no(s) convênio(s): {coverage}.\n\n"
            ));
        }
        _ => text.push_str("e realiza parto cesárea somente particular.\n\n"),
    }

    text.push_str(&format!(
        "Já nos convênios profissionais, o Dr./Dra. {name} "
    ));
    let mut plans: Vec<String> = Vec::new();
    if let Some(v) = record.get(fields::ATENDIMENTO_CLINICO_PRO) {
        plans.push(format!("Atendimento clínico: {v}"));
    }
    if let Some(v) = record.get(fields::PRE_NATAL_PRO) {
        plans.push(format!("Pré-natal: {v}"));
    }
    if let Some(v) = record.get(fields::PARTO_NORMAL_PRO) {
        plans.push(format!("Parto normal: {v}"));
    }
    if let Some(v) = record.get(fields::PARTO_CESAREA_PRO) {
        plans.push(format!("Parto cesárea: {v}"));
    }
    if !plans.is_empty() {
        text.push_str("realiza nos seguintes convênios profissionais:\n\n");
        text.push_str(&plans.join("\n"));
        text.push_str("\n\n");
    }

    text
}

/// Uppercases the first letter of each alphabetic run, lowercases the rest.
fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut at_word_start = true;
    for ch in s.chars() {
        if ch.is_alphabetic() {
            if at_word_start {
                out.extend(ch.to_uppercase());
            } else {
                out.extend(ch.to_lowercase());
            }
            at_word_start = false;
        } else {
            out.push(ch);
            at_word_start = true;
        }
    }
    out
}
