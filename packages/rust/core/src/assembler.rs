//! Blueprint library document assembler.
//!
//! Fetches the catalog from a [`BlueprintProvider`], groups it by category
//! and renders one Markdown section per category with one bullet per
//! blueprint and one nested bullet per attribute.

use tracing::{info, instrument};

use bpdocs_catalog::BlueprintProvider;
use bpdocs_markdown::MarkdownDocument;
use bpdocs_markdown::style::{bold, code, color, italic, parentheses, sub};
use bpdocs_shared::{AttributeDescriptor, BlueprintRecord, Result};

use crate::grouping::{CategoryGroup, group_by_category};

/// Color of blueprint names in the list.
pub const LIST_COLOR: &str = "#498efc";

/// Heading level of category sections.
const CATEGORY_HEADING_LEVEL: usize = 3;

const INTRO: &str = "The Blueprint Library \
    ([`carla.BlueprintLibrary`](../python_api/#carlablueprintlibrary-class)) \
    is a summary of all [`carla.ActorBlueprint`](../python_api/#carla.ActorBlueprint) \
    and its attributes ([`carla.ActorAttribute`](../python_api/#carla.ActorAttribute)) \
    available to the user in CARLA.";

const SAMPLE_LEAD_IN: &str =
    "\nHere is an example code for printing all actor blueprints and their attributes:";

const SAMPLE_CODE: &str = "blueprints = [bp for bp in world.get_blueprint_library().filter('*')]\n\
    for blueprint in blueprints:\n   \
    print(blueprint.id)\n   \
    for attr in blueprint:\n       \
    print('  - {}'.format(attr))";

const SEE_ALSO: &str = "Check out the [introduction to blueprints](core_actors.md).";

/// A rendered blueprint library with a few counts for reporting.
#[derive(Debug, Clone)]
pub struct AssembledDocument {
    pub markdown: String,
    pub category_count: usize,
    pub blueprint_count: usize,
    pub attribute_count: usize,
}

/// Fetch every blueprint matching `filter` and render the library document.
///
/// The only failure is the provider's: nothing past the fetch can fail.
#[instrument(skip(provider), fields(source = %provider.describe()))]
pub async fn assemble<P: BlueprintProvider>(provider: &P, filter: &str) -> Result<AssembledDocument> {
    let blueprints = provider.blueprints(filter).await?;

    let blueprint_count = blueprints.len();
    let attribute_count = blueprints.iter().map(|bp| bp.attributes.len()).sum();

    let groups = group_by_category(blueprints);
    let markdown = render_library(&groups);

    info!(
        categories = groups.len(),
        blueprint_count,
        attribute_count,
        bytes = markdown.len(),
        "blueprint library rendered"
    );

    Ok(AssembledDocument {
        markdown,
        category_count: groups.len(),
        blueprint_count,
        attribute_count,
    })
}

/// Render grouped blueprints, preamble first, categories in the given order.
pub fn render_library(groups: &[CategoryGroup]) -> String {
    let mut md = MarkdownDocument::new();
    write_preamble(&mut md);

    for group in groups {
        md.append_heading(CATEGORY_HEADING_LEVEL, &group.name);
        for bp in &group.blueprints {
            write_blueprint(&mut md, bp);
        }
        md.close_list_item();
    }

    md.into_contents()
}

fn write_preamble(md: &mut MarkdownDocument) {
    md.append_paragraph("Blueprint Library");
    md.append_text_line(INTRO);
    md.append_text_line(SAMPLE_LEAD_IN);
    let sample = md.format_code_block(SAMPLE_CODE, "py");
    md.append_text_line(&sample);
    md.append_text_line(SEE_ALSO);
}

fn write_blueprint(md: &mut MarkdownDocument, bp: &BlueprintRecord) {
    md.open_list_item_line(&bold(&color(LIST_COLOR, &bp.id)));
    md.open_list_item(&format!("{}\n", bold("Attributes:")));

    let mut attributes: Vec<&AttributeDescriptor> = bp.attributes.iter().collect();
    attributes.sort_by(|a, b| a.id.cmp(&b.id));

    for attr in attributes {
        md.open_list_item(&code(&attr.id));
        md.append_text(&format!(" {}", parentheses(&italic(attr.kind.as_str()))));
        if attr.is_modifiable {
            md.append_text(&format!(" {}", sub(&italic("- Modifiable"))));
        }
        md.close_list_item_line();
    }

    md.close_list_item();
    md.close_list_item();
}
