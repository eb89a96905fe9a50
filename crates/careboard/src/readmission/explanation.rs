use super::domain::{RiskFactor, RiskFactorFinding};

const POSITIVE_RECOMMENDATION: &str = "Close monitoring after discharge and an early follow-up appointment are recommended to reduce the likelihood of readmission.";
const NEGATIVE_REASSURANCE: &str = "These findings suggest a lower likelihood of readmission within 30 days; routine follow-up care should be sufficient.";

/// Builds the two-paragraph rationale shown on the result view.
///
/// A readmission names the predicates that fired; otherwise the text names
/// the ones that did not. Clause order always follows [`RiskFactor::ALL`].
pub(crate) fn explain(findings: &[RiskFactorFinding], will_be_readmitted: bool) -> String {
    if will_be_readmitted {
        let clauses: Vec<&str> = findings
            .iter()
            .filter(|finding| finding.present)
            .map(|finding| risk_clause(finding.factor))
            .collect();
        format!(
            "The patient is at elevated risk of readmission within 30 days due to {}.\n\n{}",
            join_clauses(&clauses),
            POSITIVE_RECOMMENDATION
        )
    } else {
        let clauses: Vec<&str> = findings
            .iter()
            .filter(|finding| !finding.present)
            .map(|finding| protective_clause(finding.factor))
            .collect();
        format!(
            "The patient's overall condition appears stable, with {}.\n\n{}",
            join_clauses(&clauses),
            NEGATIVE_REASSURANCE
        )
    }
}

pub(crate) fn risk_clause(factor: RiskFactor) -> &'static str {
    match factor {
        RiskFactor::AdvancedAge => "advanced age",
        RiskFactor::PriorAdmission => "previous hospitalization",
        RiskFactor::ExtendedIcuStay => "extended ICU stay",
        RiskFactor::ElevatedCreatinine => "elevated creatinine indicating renal impairment",
        RiskFactor::HighSofa => "a high SOFA score reflecting organ dysfunction",
        RiskFactor::HighSapsII => "a high SAPS-II score",
        RiskFactor::ComorbidityBurden => "a significant comorbidity burden",
    }
}

pub(crate) fn protective_clause(factor: RiskFactor) -> &'static str {
    match factor {
        RiskFactor::AdvancedAge => "younger age",
        RiskFactor::PriorAdmission => "first admission",
        RiskFactor::ExtendedIcuStay => "a short ICU stay",
        RiskFactor::ElevatedCreatinine => "normal creatinine",
        RiskFactor::HighSofa => "a low SOFA score",
        RiskFactor::HighSapsII => "a low SAPS-II score",
        RiskFactor::ComorbidityBurden => "a limited comorbidity burden",
    }
}

fn join_clauses(clauses: &[&str]) -> String {
    match clauses {
        [] => "no notable risk factors".to_string(),
        [only] => (*only).to_string(),
        [head @ .., last] => format!("{} and {}", head.join(", "), last),
    }
}
