use infoflow_core::{annotate, annotate_with, extract_nodes, ReconcileError};

const RENDERED_SVG: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="no"?>
<svg xmlns="http://www.w3.org/2000/svg" width="300pt" height="200pt" viewBox="0.00 0.00 300.00 200.00">
<g id="graph0" class="graph" transform="scale(1 1) rotate(0) translate(4 196)">
<title>infoflow</title>
<g id="node1" class="node">
<title>reader_collect</title>
<polygon fill="lightgreen" stroke="black" points="10,-10 90,-10 90,-50 10,-50"/>
<text text-anchor="middle" x="50" y="-34">reader</text>
<text text-anchor="middle" x="50" y="-20">(collect)</text>
</g>
<g id="node2" class="node">
<title>source_web_article</title>
<polygon fill="none" stroke="black" points="110,-10 220,-10 220,-50 110,-50"/>
<text text-anchor="middle" x="165" y="-26">Web Article</text>
</g>
<g id="edge1" class="edge">
<title>source_web_article-&gt;reader_collect</title>
<path fill="none" stroke="black" d="M110,-30 L90,-30"/>
</g>
</g>
</svg>
"#;

#[test]
fn extract_nodes_captures_identity_shape_and_text_lines() {
    let nodes = extract_nodes(RENDERED_SVG).unwrap();
    assert_eq!(nodes.len(), 2);

    let tool = &nodes["reader_collect"];
    assert_eq!(tool.element_id, "node1");
    assert_eq!(tool.class, "node");
    assert_eq!(tool.fill, "lightgreen");
    assert_eq!(tool.stroke, "black");
    assert_eq!(tool.text_lines, vec!["reader", "(collect)"]);
    assert!(tool.is_tool_phase());

    let source = &nodes["source_web_article"];
    assert_eq!(source.element_id, "node2");
    assert_eq!(source.fill, "none");
    assert_eq!(source.text_lines, vec!["Web Article"]);
    assert!(!source.is_tool_phase());
}

#[test]
fn extract_skips_edge_groups() {
    let nodes = extract_nodes(RENDERED_SVG).unwrap();
    assert!(!nodes.contains_key("source_web_article->reader_collect"));
}

#[test]
fn missing_shape_element_is_a_fatal_contract_violation() {
    let svg = r#"<svg xmlns="http://www.w3.org/2000/svg">
<g id="node1" class="node">
<title>reader_collect</title>
<text>reader</text>
</g>
</svg>"#;

    let err = extract_nodes(svg).unwrap_err();
    assert!(matches!(
        err,
        ReconcileError::MissingShape { ref title } if title == "reader_collect"
    ));
}

#[test]
fn missing_title_element_is_fatal_too() {
    let svg = r#"<svg xmlns="http://www.w3.org/2000/svg">
<g id="node9" class="node">
<polygon fill="white" stroke="black" points="0,0 1,1"/>
</g>
</svg>"#;

    let err = extract_nodes(svg).unwrap_err();
    assert!(matches!(
        err,
        ReconcileError::MissingTitle { ref element_id } if element_id == "node9"
    ));
}

#[test]
fn garbage_input_fails_to_parse() {
    assert!(matches!(
        extract_nodes("not an svg at all <g").unwrap_err(),
        ReconcileError::Parse(_)
    ));
}

#[test]
fn annotate_attaches_tool_and_item_click_handlers() {
    let annotated = annotate(RENDERED_SVG).unwrap();

    assert!(annotated.contains(
        "<g id=\"node1\" class=\"node\" onclick=\"htmx.ajax('GET', '/tool?slug=reader', \
         {target: 'body', swap: 'innerHTML'})\" style=\"cursor:pointer;\">"
    ));
    assert!(annotated.contains(
        "<g id=\"node2\" class=\"node\" onclick=\"htmx.ajax('GET', '/item?slug=web_article', \
         {target: 'body', swap: 'innerHTML'})\" style=\"cursor:pointer;\">"
    ));
    // Edge groups stay untouched.
    assert!(annotated.contains("<g id=\"edge1\" class=\"edge\">"));
}

#[test]
fn annotate_is_keyed_by_element_id_not_label_text() {
    // The source label "Web Article" also appears inside an unrelated text
    // element; only the node's opening tag may change.
    let svg = RENDERED_SVG.replace(
        "<title>infoflow</title>",
        "<title>infoflow</title>\n<text>Web Article</text>",
    );
    let annotated = annotate(&svg).unwrap();
    assert!(annotated.contains("<text>Web Article</text>"));
    assert_eq!(annotated.matches("cursor:pointer").count(), 2);
}

#[test]
fn unparseable_tool_title_leaves_node_non_interactive() {
    let svg = r#"<svg xmlns="http://www.w3.org/2000/svg">
<g id="node1" class="node">
<title>standalone</title>
<polygon fill="orange" stroke="black" points="0,0 1,1"/>
<text>standalone</text>
</g>
</svg>"#;

    let nodes = extract_nodes(svg).unwrap();
    let annotated = annotate_with(svg, &nodes);
    assert!(annotated.contains("<g id=\"node1\" class=\"node\">"));
    assert!(!annotated.contains("onclick"));
}

#[test]
fn filled_node_with_trailing_phase_word_still_resolves_multiword_tools() {
    let svg = r#"<svg xmlns="http://www.w3.org/2000/svg">
<g id="node7" class="node">
<title>my_tool_extract</title>
<polygon fill="white" stroke="black" points="0,0 1,1"/>
<text>my_tool</text>
<text>(extract)</text>
</g>
</svg>"#;

    let annotated = annotate(svg).unwrap();
    assert!(annotated.contains("/tool?slug=my_tool"));
}
