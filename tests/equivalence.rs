use markup_ident::canon::{self, normalize_text};
use markup_ident::tree::{self, ElementSpec};
use markup_ident::{CanonError, NodePath};
use pretty_assertions::assert_eq;

fn demo(name: &str) -> String {
    format!("{}/demos/{}", env!("CARGO_MANIFEST_DIR"), name)
}

#[test]
fn text_normalization() {
    assert_eq!(
        normalize_text("   hello   world   \n    hello    world   \n"),
        normalize_text("hello world hello world")
    );
    assert_ne!(normalize_text("hello world hello world"), normalize_text("hello world"));
}

#[test]
fn pretty_and_compact_documents_are_equivalent() {
    let pretty = tree::load_document(&demo("data_collection.json")).unwrap();
    let compact = tree::load_document(&demo("data_collection_compact.json")).unwrap();
    assert!(canon::equivalent(&pretty, &compact).unwrap());
    assert_eq!(
        canon::canonicalize(&pretty).unwrap(),
        canon::canonicalize(&compact).unwrap()
    );
}

#[test]
fn subtrees_compare_independently_of_their_position() {
    let pretty = tree::load_document(&demo("data_collection.json")).unwrap();
    let method = NodePath::new(vec![0]).resolve(&pretty).unwrap();

    let standalone = ElementSpec::new("Methodology")
        .attr("id", "Meth_Type_1")
        .attr("isVersionable", "true")
        .attr("version", "1.0.0")
        .child(
            ElementSpec::new("TimeMethod")
                .attr("id", "TM_1")
                .attr("isIdentifiable", "true")
                .text("Cross-sectional survey"),
        )
        .validate_and_build()
        .unwrap();

    assert!(canon::equivalent(&method, &standalone).unwrap());
}

#[test]
fn differing_text_is_not_equivalent() {
    let x = ElementSpec::new("p")
        .text("hello world hello world")
        .validate_and_build()
        .unwrap();
    let y = ElementSpec::new("p").text("hello world").validate_and_build().unwrap();
    assert!(!canon::equivalent(&x, &y).unwrap());
}

#[test]
fn serialization_failure_propagates() {
    let good = ElementSpec::new("p").validate_and_build().unwrap();
    let bad = ElementSpec::new("p").text("\u{7}").validate_and_build().unwrap();
    assert!(matches!(
        canon::equivalent(&good, &bad),
        Err(CanonError::UnencodableChar { ch: '\u{7}', .. })
    ));
}
