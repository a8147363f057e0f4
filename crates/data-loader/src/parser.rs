//! Parser for the job-matching data files.
//!
//! All files are UTF-8, one record per line, fields separated by `::`:
//! - users.dat: userId::role::employerId::name
//! - listings.dat: listingId::employerId::createdAt::active::location::title::description
//! - interactions.dat: userId::listingId::disposition::timestamp
//! - stopwords.txt: one word per line
//!
//! Blank lines and lines starting with `#` are skipped everywhere.

use crate::error::{DataLoadError, Result};
use crate::types::*;
use std::fs;
use std::path::Path;

/// Read a file into trimmed, non-comment lines paired with 1-based line numbers
fn read_records(path: &Path) -> Result<Vec<(usize, String)>> {
    if !path.exists() {
        return Err(DataLoadError::FileNotFound {
            path: path.display().to_string(),
        });
    }
    let content = fs::read_to_string(path)?;

    Ok(content
        .lines()
        .enumerate()
        .map(|(idx, line)| (idx + 1, line.trim().to_string()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'))
        .collect())
}

/// Split a record into exactly `n` fields; the last field keeps any
/// remaining separators.
fn split_fields<'a>(line: &'a str, n: usize, line_no: usize) -> Result<Vec<&'a str>> {
    let parts: Vec<&str> = line.splitn(n, "::").map(str::trim).collect();
    if parts.len() < n {
        return Err(DataLoadError::FieldCountMismatch {
            expected: n,
            found: parts.len(),
            line: line_no,
        });
    }
    Ok(parts)
}

fn parse_id(value: &str, file: &str, line: usize, field: &str) -> Result<u32> {
    value.parse().map_err(|e| DataLoadError::ParseError {
        file: file.to_string(),
        line,
        reason: format!("Invalid {}: {}", field, e),
    })
}

fn parse_timestamp(value: &str, file: &str, line: usize) -> Result<i64> {
    value.parse().map_err(|e| DataLoadError::ParseError {
        file: file.to_string(),
        line,
        reason: format!("Invalid timestamp: {}", e),
    })
}

fn optional_text(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

fn parse_role(s: &str, line: usize) -> Result<Role> {
    match s.to_lowercase().as_str() {
        "student" => Ok(Role::Student),
        "recruiter" => Ok(Role::Recruiter),
        _ => Err(DataLoadError::InvalidValue {
            field: "role",
            value: s.to_string(),
            line,
        }),
    }
}

fn parse_active_flag(s: &str, line: usize) -> Result<bool> {
    match s.to_lowercase().as_str() {
        "1" | "true" | "yes" => Ok(true),
        "0" | "false" | "no" => Ok(false),
        _ => Err(DataLoadError::InvalidValue {
            field: "active",
            value: s.to_string(),
            line,
        }),
    }
}

fn parse_disposition(s: &str, line: usize) -> Result<Disposition> {
    match s.to_lowercase().as_str() {
        "like" | "liked" => Ok(Disposition::Liked),
        "dislike" | "disliked" => Ok(Disposition::Disliked),
        _ => Err(DataLoadError::InvalidValue {
            field: "disposition",
            value: s.to_string(),
            line,
        }),
    }
}

/// Parse the users.dat file
pub fn parse_users(path: &Path) -> Result<Vec<User>> {
    let mut users = Vec::new();

    for (line_no, line) in read_records(path)? {
        let parts = split_fields(&line, 4, line_no)?;

        let employer_id = if parts[2].is_empty() {
            None
        } else {
            Some(parse_id(parts[2], "users.dat", line_no, "employerId")?)
        };

        users.push(User {
            id: parse_id(parts[0], "users.dat", line_no, "userId")?,
            role: parse_role(parts[1], line_no)?,
            employer_id,
            name: parts[3].to_string(),
        });
    }

    Ok(users)
}

/// Parse the listings.dat file
///
/// The description is the last field so it may contain `::` itself.
pub fn parse_listings(path: &Path) -> Result<Vec<Listing>> {
    let mut listings = Vec::new();

    for (line_no, line) in read_records(path)? {
        let parts = split_fields(&line, 7, line_no)?;

        listings.push(Listing {
            id: Some(parse_id(parts[0], "listings.dat", line_no, "listingId")?),
            employer_id: parse_id(parts[1], "listings.dat", line_no, "employerId")?,
            created_at: parse_timestamp(parts[2], "listings.dat", line_no)?,
            is_active: parse_active_flag(parts[3], line_no)?,
            location: optional_text(parts[4]),
            title: parts[5].to_string(),
            description: optional_text(parts[6]),
        });
    }

    Ok(listings)
}

/// Parse the interactions.dat file
pub fn parse_interactions(path: &Path) -> Result<Vec<Interaction>> {
    let mut interactions = Vec::new();

    for (line_no, line) in read_records(path)? {
        let parts = split_fields(&line, 4, line_no)?;

        interactions.push(Interaction {
            user_id: parse_id(parts[0], "interactions.dat", line_no, "userId")?,
            listing_id: parse_id(parts[1], "interactions.dat", line_no, "listingId")?,
            disposition: parse_disposition(parts[2], line_no)?,
            timestamp: parse_timestamp(parts[3], "interactions.dat", line_no)?,
        });
    }

    Ok(interactions)
}

/// Parse a stopword file, one word per line
pub fn parse_stopwords(path: &Path) -> Result<StopwordSet> {
    let words = read_records(path)?.into_iter().map(|(_, word)| word);
    Ok(StopwordSet::from_words(words))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_fields_keeps_remainder() {
        let parts = split_fields("1::2::3::a::b::c", 4, 1).unwrap();
        assert_eq!(parts, vec!["1", "2", "3", "a::b::c"]);
    }

    #[test]
    fn test_split_fields_too_few() {
        let err = split_fields("1::2", 4, 7).unwrap_err();
        assert!(matches!(
            err,
            DataLoadError::FieldCountMismatch { expected: 4, found: 2, line: 7 }
        ));
    }

    #[test]
    fn test_parse_disposition() {
        assert_eq!(parse_disposition("like", 1).unwrap(), Disposition::Liked);
        assert_eq!(parse_disposition("DISLIKE", 1).unwrap(), Disposition::Disliked);
        assert!(parse_disposition("maybe", 1).is_err());
    }

    #[test]
    fn test_parse_active_flag() {
        assert!(parse_active_flag("1", 1).unwrap());
        assert!(!parse_active_flag("false", 1).unwrap());
        assert!(parse_active_flag("sometimes", 1).is_err());
    }

    #[test]
    fn test_missing_file() {
        let err = parse_users(Path::new("does/not/exist/users.dat")).unwrap_err();
        assert!(matches!(err, DataLoadError::FileNotFound { .. }));
    }
}
