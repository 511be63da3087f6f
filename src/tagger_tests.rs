//! End-to-end behaviour of the tagger on whole source files.

#[cfg(test)]
mod tests {
    use crate::config::{BuildMode, TaggerOptions};
    use crate::denylist::{DREI_ELEMENTS, THREE_FIBER_ELEMENTS};
    use crate::transform::{Tagger, TransformOutput};
    use pretty_assertions::assert_eq;
    use std::path::PathBuf;

    const APP_ID: &str = "/project/src/App.tsx";

    fn project_options() -> TaggerOptions {
        TaggerOptions {
            root: Some(PathBuf::from("/project")),
            ..TaggerOptions::default()
        }
    }

    fn run(options: TaggerOptions, code: &str) -> TransformOutput {
        Tagger::new(options, BuildMode::Development).transform(code, APP_ID)
    }

    fn tagged_code(options: TaggerOptions, code: &str) -> String {
        run(options, code)
            .tagged
            .expect("expected the file to be tagged")
            .code
    }

    #[test]
    fn test_scenario_div_with_text() {
        let source = "export function App() {\n  return (\n  <div>Hello</div>\n  );\n}\n";
        let code = tagged_code(project_options(), source);
        let expected = "export function App() {\n  return (\n  <div data-vt-id=\"src/App.tsx:3:2\" data-vt-name=\"div\" data-component-path=\"src/App.tsx\" data-component-line=\"3\" data-component-file=\"App.tsx\" data-component-name=\"div\" data-component-content=\"%7B%22text%22%3A%22Hello%22%7D\">Hello</div>\n  );\n}\n";
        assert_eq!(code, expected);
    }

    #[test]
    fn test_scenario_mesh_is_skipped() {
        let source = "export const Scene = () => <mesh />;\n";
        let output = run(project_options(), source);
        assert!(output.tagged.is_none());
        assert_eq!(output.report.elements_skipped, 1);
        assert_eq!(output.report.elements_tagged, 0);
    }

    #[test]
    fn test_scenario_malformed_input_is_left_alone() {
        let source = "export const Broken = () => <div className=\"x\">\n";
        let output = run(project_options(), source);
        assert!(output.tagged.is_none());
        assert!(output.report.processed);
        assert_eq!(output.report.warnings.len(), 1);
        assert!(output.report.warnings[0].contains("src/App.tsx"));
    }

    #[test]
    fn test_second_pass_adds_nothing() {
        let source = "export const A = () => (\n  <ul className=\"list\">\n    <li>One</li>\n    <li>{`Two`}</li>\n  </ul>\n);\n";
        let first = tagged_code(project_options(), source);

        let second = run(project_options(), &first);
        assert!(second.tagged.is_none());
        assert_eq!(second.report.elements_found, 3);
        assert_eq!(second.report.elements_tagged, 0);
    }

    #[test]
    fn test_every_denylisted_name_is_skipped_only_when_filtering() {
        for name in THREE_FIBER_ELEMENTS.iter().chain(DREI_ELEMENTS.iter()) {
            let source = format!("export const X = () => <{name} />;\n");

            let filtered = run(project_options(), &source);
            assert!(filtered.tagged.is_none(), "{name} should not be tagged");
            assert_eq!(filtered.report.elements_skipped, 1, "{name}");

            let unfiltered = run(
                TaggerOptions {
                    filter_3d_elements: false,
                    ..project_options()
                },
                &source,
            );
            assert_eq!(unfiltered.report.elements_skipped, 0, "{name}");
            let lowercase = name.chars().next().is_some_and(|c| !c.is_uppercase());
            assert_eq!(unfiltered.tagged.is_some(), lowercase, "{name}");
        }
    }

    #[test]
    fn test_case_gate() {
        let output = run(project_options(), "export const X = () => <Button>Go</Button>;\n");
        assert!(output.tagged.is_none());
        assert_eq!(output.report.elements_skipped, 0);

        let code = tagged_code(project_options(), "export const X = () => <button>Go</button>;\n");
        assert!(code.contains("data-vt-name=\"button\""));
    }

    #[test]
    fn test_identical_elements_differ_only_by_position() {
        let source = "export const X = () => (\n  <p>\n    <span>a</span>\n    <span>a</span>\n  </p>\n);\n";
        let code = tagged_code(project_options(), source);
        assert!(code.contains("<span data-vt-id=\"src/App.tsx:3:4\""));
        assert!(code.contains("<span data-vt-id=\"src/App.tsx:4:4\""));
    }

    #[test]
    fn test_content_is_omitted_when_empty() {
        let code = tagged_code(project_options(), "export const X = () => <hr onClick={go} />;\n");
        assert!(code.contains("data-vt-id="));
        assert!(!code.contains("data-component-content"));
    }

    #[test]
    fn test_only_selected_attributes_are_emitted() {
        let options = TaggerOptions {
            attributes_to_include: vec!["id".to_string()],
            ..project_options()
        };
        let code = tagged_code(options, "export const X = () => <div>Hi</div>;\n");
        assert_eq!(
            code,
            "export const X = () => <div data-vt-id=\"src/App.tsx:1:23\">Hi</div>;\n"
        );
    }

    #[test]
    fn test_content_only_selection_with_no_content_leaves_file_unchanged() {
        let options = TaggerOptions {
            attributes_to_include: vec!["content".to_string()],
            ..project_options()
        };
        let output = run(options, "export const X = () => <div />;\n");
        assert!(output.tagged.is_none());
        assert_eq!(output.report.elements_found, 1);
    }

    #[test]
    fn test_content_digest_collects_attributes_and_nested_text() {
        let options = TaggerOptions {
            attributes_to_include: vec!["content".to_string()],
            ..project_options()
        };
        let source = "export const X = () => <label className=\"field\" title=\"Name\">Your <b>name</b></label>;\n";
        let code = tagged_code(options, source);
        // {"text":"Your name","className":"field","title":"Name"}
        assert!(code.contains(
            "<label data-component-content=\"%7B%22text%22%3A%22Your%20name%22%2C%22className%22%3A%22field%22%2C%22title%22%3A%22Name%22%7D\" className"
        ));
    }

    #[test]
    fn test_custom_prefix_and_raw_path() {
        let options = TaggerOptions {
            prefix_name: "dbg".to_string(),
            use_relative_path: false,
            attributes_to_include: vec!["id".to_string(), "name".to_string()],
            ..TaggerOptions::default()
        };
        let code = tagged_code(options, "export const X = () => <main />;\n");
        assert_eq!(
            code,
            "export const X = () => <main data-dbg-id=\"/project/src/App.tsx:1:23\" data-dbg-name=\"main\" data-component-name=\"main\" />;\n"
        );
    }

    #[test]
    fn test_text_outside_insertions_is_preserved() {
        let source = "// header\nimport React from 'react';\n\nexport const X = () => <nav>\n  {items}\n</nav>;\n";
        let options = TaggerOptions {
            attributes_to_include: vec!["line".to_string()],
            ..project_options()
        };
        let code = tagged_code(options, source);
        assert_eq!(code.replace(" data-component-line=\"4\"", ""), source);
    }

    #[test]
    fn test_source_map_maps_following_code_back() {
        let source = "export const X = () => <div>Hi</div>;\nexport const Y = 1;\n";
        let output = run(project_options(), source);
        let tagged = output.tagged.unwrap();

        let closing = tagged.code.find("Hi</div>").unwrap() as u32;
        let token = tagged.map.lookup_token(0, closing).unwrap();
        assert_eq!(token.get_src_line(), 0);
        assert_eq!(token.get_src_col(), source.find("Hi").unwrap() as u32);
        assert_eq!(token.get_source(), Some(APP_ID));
    }

    #[test]
    fn test_entities_are_decoded_in_content() {
        let options = TaggerOptions {
            attributes_to_include: vec!["content".to_string()],
            ..project_options()
        };
        let source = "export const X = () => (\n  <div>\n    <p>Tom &amp; Jerry</p>\n    <img alt=\"a &amp; b\" />\n  </div>\n);\n";
        let code = tagged_code(options, source);
        // {"text":"Tom & Jerry"}
        assert!(code.contains(
            "<p data-component-content=\"%7B%22text%22%3A%22Tom%20%26%20Jerry%22%7D\">Tom &amp; Jerry</p>"
        ));
        // {"alt":"a & b"}
        assert!(code.contains(
            "<img data-component-content=\"%7B%22alt%22%3A%22a%20%26%20b%22%7D\" alt=\"a &amp; b\" />"
        ));
    }

    #[test]
    fn test_bare_this_tag_is_tagged() {
        let options = TaggerOptions {
            attributes_to_include: vec!["id".to_string(), "name".to_string()],
            ..project_options()
        };
        let code = tagged_code(options, "export const X = () => <this>hi</this>;\n");
        assert_eq!(
            code,
            "export const X = () => <this data-vt-id=\"src/App.tsx:1:23\" data-vt-name=\"this\" data-component-name=\"this\">hi</this>;\n"
        );
    }
}
