use serde::Serialize;

pub const DEFAULT_RESUME_NAME: &str = "uploaded_resume.pdf";

const FEEDBACK_EN: &str =
    "Excellent match for the role! Focus on quantifying achievements for a perfect score.";
const FEEDBACK_AR: &str = "تطابق ممتاز للدور! ركز على تحديد الإنجازات كمياً للحصول على درجة كاملة.";

/// Keyword → match score, checked in order. The first hit wins.
const KEYWORD_SCORES: &[(&str, u32)] = &[("data scientist", 92), ("manager", 78)];
const DEFAULT_SCORE: u32 = 65;

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ResumeAnalysis {
    pub filename: String,
    pub match_score: u32,
    pub feedback_en: String,
    pub feedback_ar: String,
}

/// Mock resume screening driven purely by the uploaded file name.
///
/// Matching is case-insensitive and treats `_` and `-` as spaces, so
/// `Data_Scientist-CV.pdf` scores like `data scientist cv.pdf`.
pub fn analyze_resume(filename: Option<&str>) -> ResumeAnalysis {
    let filename = filename
        .map(str::trim)
        .filter(|f| !f.is_empty())
        .unwrap_or(DEFAULT_RESUME_NAME)
        .to_string();

    let normalized: String = filename
        .to_lowercase()
        .chars()
        .map(|c| if c == '_' || c == '-' { ' ' } else { c })
        .collect();

    let match_score = KEYWORD_SCORES
        .iter()
        .find(|(keyword, _)| normalized.contains(keyword))
        .map(|(_, score)| *score)
        .unwrap_or(DEFAULT_SCORE);

    ResumeAnalysis {
        filename,
        match_score,
        feedback_en: FEEDBACK_EN.to_string(),
        feedback_ar: FEEDBACK_AR.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_scientist_scores_highest() {
        assert_eq!(analyze_resume(Some("Senior Data Scientist.pdf")).match_score, 92);
        assert_eq!(analyze_resume(Some("data_scientist_cv.pdf")).match_score, 92);
    }

    #[test]
    fn test_manager_keyword() {
        assert_eq!(analyze_resume(Some("Project-Manager.docx")).match_score, 78);
    }

    #[test]
    fn test_data_scientist_beats_manager() {
        assert_eq!(
            analyze_resume(Some("data scientist manager.pdf")).match_score,
            92
        );
    }

    #[test]
    fn test_default_score_and_name() {
        let analysis = analyze_resume(None);
        assert_eq!(analysis.filename, DEFAULT_RESUME_NAME);
        assert_eq!(analysis.match_score, 65);
        assert!(!analysis.feedback_ar.is_empty());
    }
}
