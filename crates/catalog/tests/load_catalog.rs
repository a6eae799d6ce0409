//! Integration tests for loading a catalog file.
//!
//! These tests write a small Rotten Tomatoes style export to disk and check
//! that movies, registries and predicates line up.

use catalog::{Catalog, CatalogError, Genre};
use std::io::Write;
use std::sync::Arc;
use tempfile::NamedTempFile;

const REVIEWS: &str = "\
rotten_tomatoes_link,movie_title,content_rating,genre,directors,original_release_date,streaming_release_date,runtime,production_company,audience_rating,audience_count
m/1000640-all_of_me,All of Me,PG,Comedy,Carl Reiner,1984-09-21,2016-10-30,93,HBO Video,67,14346
m/the_jerk,The Jerk,R,COMEDY,Carl Reiner,1979-12-14,2011-05-01,94,Universal,31,250
m/notebook,The Notebook,PG-13,Romance,Nick Cassavetes,2004-06-25,2013-01-01,85,New Line,85,900000
m/halloween,Halloween,R,Horror,John Carpenter,1978-10-25,2004-01-01,abc,Compass,81,300000
m/tiny,Tiny Short,NR,Drama,,2010-01-01,,12,,50,20
m/broken,,PG,Drama,Someone,,,,,,
m/unrated,Unrated Thing,XXX,Drama,,,,,,,
";

fn write_reviews() -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(REVIEWS.as_bytes()).unwrap();
    file
}

#[test]
fn test_load_catalog_file() {
    let file = write_reviews();
    let catalog = Catalog::load_from_file(file.path()).unwrap();

    assert_eq!(catalog.len(), 5);
    assert_eq!(catalog.skipped().len(), 2);
    assert_eq!(
        catalog.skipped().iter().map(|s| s.line).collect::<Vec<_>>(),
        [7, 8]
    );

    // Someone from the rejected row was never registered: the row failed
    // before its directors were resolved
    assert_eq!(catalog.persons().count(), 3);
    assert!(catalog.persons().get("someone").is_none());
}

#[test]
fn test_loaded_predicates() {
    let file = write_reviews();
    let catalog = Catalog::load_from_file(file.path()).unwrap();
    let movies = catalog.movies();

    let all_of_me = &movies[0];
    assert!(all_of_me.has_relevant_score());
    assert!(!all_of_me.as_comedy().unwrap().is_slapstick());
    assert!(!all_of_me.is_short());

    let the_jerk = movies[1].as_comedy().unwrap();
    assert!(the_jerk.is_slapstick());

    let notebook = movies[2].as_romance().unwrap();
    assert!(notebook.is_cosy());

    let halloween = &movies[3];
    assert_eq!(halloween.genre(), Genre::Horror);
    assert!(halloween.as_horror().unwrap().is_scary());
    assert_eq!(halloween.length(), None);
    assert!(halloween.is_classic());

    let tiny = &movies[4];
    assert!(tiny.is_short());
    assert!(!tiny.has_relevant_score());
    assert!(tiny.directors().is_empty());
}

#[test]
fn test_shared_instances() {
    let file = write_reviews();
    let catalog = Catalog::load_from_file(file.path()).unwrap();
    let movies = catalog.movies();

    assert!(Arc::ptr_eq(&movies[0].directors()[0], &movies[1].directors()[0]));
    assert!(Arc::ptr_eq(movies[1].rating(), movies[3].rating()));
}

#[test]
fn test_missing_catalog_file() {
    let dir = tempfile::tempdir().unwrap();
    let result = Catalog::load_from_file(&dir.path().join("reviews.csv"));
    assert!(matches!(result, Err(CatalogError::FileNotFound { .. })));
}
