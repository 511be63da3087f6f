//! Element classification: which opening tags get tagged.

use oxc_ast::ast::*;

use crate::config::TaggerOptions;
use crate::denylist::is_3d_element;

/// Outcome of running an opening tag through the tagging gates, in gate order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// Namespaced name such as `svg:rect`.
    UnsupportedName,
    Fragment,
    /// On the 3D denylist.
    Denylisted(String),
    /// Starts with an uppercase letter: a composed component.
    Component(String),
    /// Already carries the primary id attribute.
    AlreadyTagged(String),
    Accept(String),
}

/// Resolve `<div>` to `div` and `<motion.div>` to `motion.div`.
pub fn element_name(name: &JSXElementName) -> Option<String> {
    match name {
        JSXElementName::Identifier(id) => Some(id.name.to_string()),
        JSXElementName::IdentifierReference(id) => Some(id.name.to_string()),
        JSXElementName::MemberExpression(member) => Some(member_name(member)),
        JSXElementName::ThisExpression(_) => Some("this".to_string()),
        JSXElementName::NamespacedName(_) => None,
    }
}

fn member_name(member: &JSXMemberExpression) -> String {
    let object = match &member.object {
        JSXMemberExpressionObject::IdentifierReference(id) => id.name.to_string(),
        JSXMemberExpressionObject::MemberExpression(inner) => member_name(inner),
        JSXMemberExpressionObject::ThisExpression(_) => "this".to_string(),
    };
    format!("{}.{}", object, member.property.name)
}

fn is_fragment(name: &str) -> bool {
    name == "Fragment" || name == "React.Fragment"
}

/// Lowercase-initial names are plain markup elements.
fn is_plain_element(name: &str) -> bool {
    name.chars().next().is_some_and(|c| !c.is_uppercase())
}

/// Whether the opening tag already has an attribute literally named `attr_name`.
pub fn has_attribute(opening: &JSXOpeningElement, attr_name: &str) -> bool {
    opening.attributes.iter().any(|item| match item {
        JSXAttributeItem::Attribute(attr) => {
            matches!(&attr.name, JSXAttributeName::Identifier(id) if id.name == attr_name)
        }
        JSXAttributeItem::SpreadAttribute(_) => false,
    })
}

pub fn classify(opening: &JSXOpeningElement, options: &TaggerOptions) -> Verdict {
    let Some(name) = element_name(&opening.name) else {
        return Verdict::UnsupportedName;
    };
    if is_fragment(&name) {
        return Verdict::Fragment;
    }
    if options.filter_3d_elements && is_3d_element(&name) {
        return Verdict::Denylisted(name);
    }
    if !is_plain_element(&name) {
        return Verdict::Component(name);
    }
    if has_attribute(opening, &options.id_attribute()) {
        return Verdict::AlreadyTagged(name);
    }
    Verdict::Accept(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use oxc_allocator::Allocator;
    use oxc_parser::Parser;
    use oxc_span::SourceType;

    fn verdict_for(source: &str, options: &TaggerOptions) -> Verdict {
        let allocator = Allocator::default();
        let ret = Parser::new(&allocator, source, SourceType::tsx()).parse();
        assert!(ret.errors.is_empty(), "{:?}", ret.errors);
        let Some(Statement::ExpressionStatement(stmt)) = ret.program.body.first() else {
            panic!("expected an expression statement");
        };
        let Expression::JSXElement(element) = stmt.expression.without_parentheses() else {
            panic!("expected a JSX element");
        };
        classify(&element.opening_element, options)
    }

    #[test]
    fn test_plain_elements_are_accepted() {
        let options = TaggerOptions::default();
        assert_eq!(verdict_for("<div />;", &options), Verdict::Accept("div".into()));
        assert_eq!(
            verdict_for("<motion.div />;", &options),
            Verdict::Accept("motion.div".into())
        );
        assert_eq!(
            verdict_for("<a.b.c />;", &options),
            Verdict::Accept("a.b.c".into())
        );
        assert_eq!(verdict_for("<this />;", &options), Verdict::Accept("this".into()));
        assert_eq!(
            verdict_for("<this.panel />;", &options),
            Verdict::Accept("this.panel".into())
        );
    }

    #[test]
    fn test_components_and_fragments_are_skipped() {
        let options = TaggerOptions::default();
        assert_eq!(
            verdict_for("<Button />;", &options),
            Verdict::Component("Button".into())
        );
        assert_eq!(
            verdict_for("<UI.Card />;", &options),
            Verdict::Component("UI.Card".into())
        );
        assert_eq!(verdict_for("<Fragment></Fragment>;", &options), Verdict::Fragment);
        assert_eq!(
            verdict_for("<React.Fragment></React.Fragment>;", &options),
            Verdict::Fragment
        );
    }

    #[test]
    fn test_namespaced_names_are_unsupported() {
        let options = TaggerOptions::default();
        assert_eq!(
            verdict_for("<svg:rect />;", &options),
            Verdict::UnsupportedName
        );
    }

    #[test]
    fn test_denylist_respects_option() {
        let mut options = TaggerOptions::default();
        assert_eq!(
            verdict_for("<mesh />;", &options),
            Verdict::Denylisted("mesh".into())
        );
        assert_eq!(
            verdict_for("<OrbitControls />;", &options),
            Verdict::Denylisted("OrbitControls".into())
        );

        options.filter_3d_elements = false;
        assert_eq!(verdict_for("<mesh />;", &options), Verdict::Accept("mesh".into()));
        assert_eq!(
            verdict_for("<OrbitControls />;", &options),
            Verdict::Component("OrbitControls".into())
        );
    }

    #[test]
    fn test_already_tagged_uses_configured_prefix() {
        let mut options = TaggerOptions::default();
        let source = r#"<div data-vt-id="src/App.tsx:1:0" />;"#;
        assert_eq!(
            verdict_for(source, &options),
            Verdict::AlreadyTagged("div".into())
        );

        options.prefix_name = "other".to_string();
        assert_eq!(verdict_for(source, &options), Verdict::Accept("div".into()));
    }
}
