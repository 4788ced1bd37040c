//! HTTP span helpers.

#[derive(Debug, Clone)]
pub(super) struct RequestSpanName {
    pub(super) otel_path: String,
    pub(super) otel_span_name: String,
}

pub(super) fn request_span_name(method: &str, path: &str) -> RequestSpanName {
    let otel_path = normalise_path_for_span_name(path);
    let otel_span_name = format!("{method} {otel_path}");

    RequestSpanName {
        otel_path,
        otel_span_name,
    }
}

/// Collapse numeric segments so span names and metric labels stay low-cardinality.
fn normalise_path_for_span_name(path: &str) -> String {
    let segments: Vec<&str> = path
        .split('/')
        .filter(|segment| !segment.is_empty())
        .map(|segment| {
            if segment.bytes().all(|b| b.is_ascii_digit()) {
                "{id}"
            } else {
                segment
            }
        })
        .collect();

    format!("/{}", segments.join("/"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn span_name_combines_method_and_path() {
        let names = request_span_name("POST", "/transaction/redemption");

        assert_eq!(names.otel_path, "/transaction/redemption");
        assert_eq!(names.otel_span_name, "POST /transaction/redemption");
    }

    #[test]
    fn numeric_segments_are_collapsed() {
        assert_eq!(normalise_path_for_span_name("/voucher/42"), "/voucher/{id}");
        assert_eq!(normalise_path_for_span_name("/voucher/brand"), "/voucher/brand");
    }

    #[test]
    fn root_and_trailing_slashes_normalise() {
        assert_eq!(normalise_path_for_span_name("/"), "/");
        assert_eq!(normalise_path_for_span_name("/brand/"), "/brand");
    }
}
