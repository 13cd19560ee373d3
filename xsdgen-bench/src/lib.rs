//! # xsdgen Bench
//!
//! Synthetic schemas for xsdgen performance testing.

use std::fmt::Write;

/// Builds a schema with `types` simple types, `types` complex types and one
/// top-level element per complex type.
///
/// Each complex type references its simple type and, except the first, the
/// previous complex type, so resolution and the emit-once cache both see
/// realistic traffic.
#[must_use]
pub fn synthetic_schema(types: usize) -> String {
    let mut xsd = String::from(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <xs:schema xmlns:xs=\"http://www.w3.org/2001/XMLSchema\" \
         xmlns:tns=\"urn:bench\" targetNamespace=\"urn:bench\">\n",
    );

    for i in 0..types {
        let _ = write!(
            xsd,
            "  <xs:simpleType name=\"Code{i}\">\n\
             \x20   <xs:restriction base=\"xs:string\"/>\n\
             \x20 </xs:simpleType>\n\
             \x20 <xs:complexType name=\"Record{i}\">\n\
             \x20   <xs:annotation><xs:documentation>Record number {i}.</xs:documentation></xs:annotation>\n\
             \x20   <xs:sequence>\n\
             \x20     <xs:element name=\"code\" type=\"tns:Code{i}\"/>\n\
             \x20     <xs:element name=\"amount\" type=\"xs:decimal\" minOccurs=\"0\"/>\n\
             \x20     <xs:element name=\"tag\" type=\"xs:string\" maxOccurs=\"unbounded\"/>\n"
        );
        if i > 0 {
            let _ = writeln!(
                xsd,
                "      <xs:element name=\"previous\" type=\"tns:Record{}\"/>",
                i - 1
            );
        }
        let _ = write!(
            xsd,
            "    </xs:sequence>\n\
             \x20   <xs:attribute name=\"id\" type=\"xs:ID\" use=\"required\"/>\n\
             \x20 </xs:complexType>\n\
             \x20 <xs:element name=\"record-{i}\" type=\"tns:Record{i}\"/>\n"
        );
    }

    xsd.push_str("</xs:schema>\n");
    xsd
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_synthetic_schema_parses() {
        let tree = xsdgen_schema::parse_schema(&synthetic_schema(3)).expect("parse");
        assert_eq!(tree.len(), 9);
    }

    #[test]
    fn test_synthetic_schema_empty() {
        let tree = xsdgen_schema::parse_schema(&synthetic_schema(0)).expect("parse");
        assert!(tree.is_empty());
    }
}
