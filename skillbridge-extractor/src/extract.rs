//! Resume text extraction and the skills vocabulary scan.
//!
//! PDF bodies go through `pdf-extract`; anything else is treated as UTF-8
//! text. The scan is a word-level, case-insensitive lookup against a static
//! vocabulary, and skills are reported capitalized and deduplicated.

use std::collections::HashSet;

use crate::errors::AppError;

/// Vocabulary of skills the scan recognizes. Expand this as needed.
pub const SKILLS: [&str; 11] = [
    "python",
    "javascript",
    "react",
    "node",
    "java",
    "html",
    "css",
    "sql",
    "git",
    "docker",
    "aws",
];

/// Pull plain text out of an uploaded file body.
pub fn extract_text(file_name: &str, bytes: &[u8]) -> Result<String, AppError> {
    if file_name.to_lowercase().ends_with(".pdf") || bytes.starts_with(b"%PDF") {
        pdf_extract::extract_text_from_mem(bytes)
            .map_err(|e| AppError::Extraction(e.to_string()))
    } else {
        Ok(String::from_utf8_lossy(bytes).into_owned())
    }
}

/// Scan `text` for vocabulary words. Returns each recognized skill once, in
/// vocabulary order, capitalized.
pub fn scan_skills(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    let tokens: HashSet<&str> = lower
        .split(|c: char| !c.is_alphanumeric() && c != '+' && c != '#')
        .filter(|token| !token.is_empty())
        .collect();

    SKILLS
        .iter()
        .filter(|skill| tokens.contains(**skill))
        .map(|skill| capitalize(skill))
        .collect()
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_finds_known_skills() {
        let skills = scan_skills("Experienced in Python, SQL and Docker deployments");
        assert_eq!(skills, ["Python", "Sql", "Docker"]);
    }

    #[test]
    fn test_scan_is_case_insensitive() {
        let skills = scan_skills("PYTHON python PyThOn");
        assert_eq!(skills, ["Python"]);
    }

    #[test]
    fn test_scan_matches_whole_tokens_only() {
        // "javascripting" is not the token "javascript".
        let skills = scan_skills("javascripting enthusiast");
        assert!(skills.is_empty());
    }

    #[test]
    fn test_scan_splits_on_punctuation() {
        let skills = scan_skills("node.js,react;git/docker");
        assert_eq!(skills, ["React", "Node", "Git", "Docker"]);
    }

    #[test]
    fn test_scan_returns_empty_for_unrelated_text() {
        assert!(scan_skills("gardening and cooking").is_empty());
    }

    #[test]
    fn test_plain_text_passthrough() {
        let text = extract_text("resume.txt", b"Python developer").unwrap();
        assert_eq!(text, "Python developer");
    }

    #[test]
    fn test_pdf_magic_bytes_route_to_pdf_extraction() {
        // Not a valid PDF, so extraction must fail rather than fall through
        // to the UTF-8 path.
        assert!(extract_text("resume", b"%PDF-1.7 garbage").is_err());
    }
}
