// advpl-outline host tests
//
// Engine behaviour is covered in crates/advpl-extractors; these exercise the
// host layer around it.

pub mod outline_tests; // Tree model and rendering

/// Sample used across host tests
pub const SAMPLE_SOURCE: &str = r#"#include "protheus.ch"

User Function MyReport(cTitle, nCopies)
Local oReport
Private lPrinted := .F.
Return

Static Function Sum(nA, nB)
Local nResult := nA + nB
Return nResult
"#;
