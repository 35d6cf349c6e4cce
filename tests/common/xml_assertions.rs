use quire::markup::Element;

/// Returns the `w:sdtPr` block of a control.
pub fn properties(sdt: &Element) -> &Element {
    sdt.find("w:sdtPr").expect("control should have w:sdtPr")
}

/// Returns the `w:sdtContent` block of a control.
pub fn content(sdt: &Element) -> &Element {
    sdt.find("w:sdtContent")
        .expect("control should have w:sdtContent")
}

/// Reads `w:val` from a direct child of the properties block.
pub fn property_val<'a>(sdt: &'a Element, name: &str) -> Option<&'a str> {
    properties(sdt).find(name).and_then(|e| e.attribute("w:val"))
}

/// Collects every `w:id` value in the tree, depth first.
pub fn all_ids(root: &Element) -> Vec<String> {
    let mut ids = Vec::new();
    collect_ids(root, &mut ids);
    ids
}

fn collect_ids(element: &Element, out: &mut Vec<String>) {
    if element.name() == "w:sdtPr" {
        if let Some(id) = element.find("w:id").and_then(|e| e.attribute("w:val")) {
            out.push(id.to_string());
        }
    }
    for child in element.child_elements() {
        collect_ids(child, out);
    }
}

// ============================================================================
// Fluent Assertion Macros
// ============================================================================

/// Assert that an element has a direct child with the given name
#[macro_export]
macro_rules! assert_has_child {
    ($element:expr, $name:expr) => {
        assert!(
            $element.find($name).is_some(),
            "<{}> should contain <{}>, children were: {:?}",
            $element.name(),
            $name,
            $element.child_elements().map(|e| e.name()).collect::<Vec<_>>()
        );
    };
}

/// Assert that an element has no direct child with the given name
#[macro_export]
macro_rules! assert_no_child {
    ($element:expr, $name:expr) => {
        assert!(
            $element.find($name).is_none(),
            "<{}> should NOT contain <{}>",
            $element.name(),
            $name
        );
    };
}

/// Assert that written XML contains a fragment
#[macro_export]
macro_rules! assert_xml_contains {
    ($xml:expr, $fragment:expr) => {
        assert!(
            $xml.contains($fragment),
            "XML should contain '{}', but was:\n{}",
            $fragment,
            $xml
        );
    };
}
