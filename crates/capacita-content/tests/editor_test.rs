//! Editor operations over training documents.

use capacita_content::{
    Align, BlockId, BlockKind, BlockPatch, BlockType, ContentBlock, DeleteOutcome, Direction,
    HeadingLevel, InsertPosition, SectionId, TrainingDocument, TrainingSection,
};

fn section_with(kinds: Vec<BlockKind>) -> TrainingSection {
    TrainingSection::with_blocks("Seção", kinds.into_iter().map(ContentBlock::new).collect())
}

fn ids(section: &TrainingSection) -> Vec<BlockId> {
    section.blocks.iter().map(|b| b.id.clone()).collect()
}

#[test]
fn placeholder_has_one_empty_text_block() {
    let doc = TrainingDocument::placeholder();
    assert_eq!(doc.sections.len(), 1);
    assert_eq!(doc.sections[0].title, "Conteúdo Principal");
    assert_eq!(doc.block_count(), 1);
    assert_eq!(doc.sections[0].blocks[0].kind, BlockKind::text(""));
}

#[test]
fn insert_after_reference_block() {
    let mut doc = TrainingDocument::new(vec![section_with(vec![
        BlockKind::text("a"),
        BlockKind::text("b"),
    ])]);
    let section_id = doc.sections[0].id.clone();
    let first = doc.sections[0].blocks[0].id.clone();

    let new_id = doc
        .insert_block(&section_id, InsertPosition::After(first), BlockType::Heading)
        .unwrap();
    assert_eq!(doc.section_of(&new_id).map(|s| &s.id), Some(&section_id));

    let section = &doc.sections[0];
    assert_eq!(section.blocks[1].id, new_id);
    assert_eq!(
        section.blocks[1].kind,
        BlockKind::Heading {
            content: String::new(),
            level: HeadingLevel::H2,
            align: Align::Left,
        }
    );
}

#[test]
fn insert_with_unknown_reference_appends() {
    let mut doc = TrainingDocument::placeholder();
    let section_id = doc.sections[0].id.clone();
    let new_id = doc
        .insert_block(
            &section_id,
            InsertPosition::After(BlockId::from("missing")),
            BlockType::Checklist,
        )
        .unwrap();
    assert_eq!(doc.sections[0].blocks.last().map(|b| &b.id), Some(&new_id));
}

#[test]
fn insert_into_unknown_section_is_none() {
    let mut doc = TrainingDocument::placeholder();
    let result = doc.insert_block(&SectionId::from("nope"), InsertPosition::End, BlockType::Text);
    assert!(result.is_none());
    assert_eq!(doc.block_count(), 1);
}

#[test]
fn inserted_ids_are_unique() {
    let mut doc = TrainingDocument::placeholder();
    let section_id = doc.sections[0].id.clone();
    for ty in BlockType::ALL {
        doc.insert_block(&section_id, InsertPosition::End, ty);
    }
    let mut all: Vec<_> = doc.blocks().map(|b| b.id.clone()).collect();
    all.sort_by(|a, b| a.as_str().cmp(b.as_str()));
    all.dedup();
    assert_eq!(all.len(), 1 + BlockType::ALL.len());
}

#[test]
fn update_ignores_fields_of_other_variants() {
    let mut doc = TrainingDocument::new(vec![section_with(vec![BlockKind::Divider])]);
    let id = doc.sections[0].blocks[0].id.clone();
    let patch = BlockPatch {
        content: Some("texto".into()),
        level: Some(HeadingLevel::H1),
        ..BlockPatch::default()
    };
    assert!(doc.update_block(&id, &patch));
    assert_eq!(doc.sections[0].blocks[0].kind, BlockKind::Divider);
}

#[test]
fn update_merges_relevant_fields() {
    let mut doc = TrainingDocument::new(vec![section_with(vec![BlockKind::heading(2, "Antigo")])]);
    let id = doc.sections[0].blocks[0].id.clone();
    let patch = BlockPatch {
        content: Some("Novo".into()),
        align: Some(Align::Center),
        media_url: Some("https://ignored".into()),
        ..BlockPatch::default()
    };
    doc.update_block(&id, &patch);
    assert_eq!(
        doc.sections[0].blocks[0].kind,
        BlockKind::Heading {
            content: "Novo".into(),
            level: HeadingLevel::H2,
            align: Align::Center,
        }
    );
}

#[test]
fn update_unknown_id_is_silent_noop() {
    let mut doc = TrainingDocument::placeholder();
    let before = doc.clone();
    assert!(!doc.update_block(&BlockId::from("ghost"), &BlockPatch::content("x")));
    assert_eq!(doc, before);
}

#[test]
fn change_type_keeps_id_and_text() {
    let mut doc = TrainingDocument::new(vec![section_with(vec![BlockKind::text("Cuidado")])]);
    let id = doc.sections[0].blocks[0].id.clone();
    assert!(doc.change_block_type(&id, BlockType::Quote));
    let block = doc.find_block(&id).unwrap();
    assert_eq!(block.kind, BlockKind::Quote { content: "Cuidado".into() });
}

#[test]
fn deleting_sole_block_clears_it() {
    let mut doc = TrainingDocument::new(vec![section_with(vec![BlockKind::Heading {
        content: "Só eu".into(),
        level: HeadingLevel::H3,
        align: Align::Right,
    }])]);
    let id = doc.sections[0].blocks[0].id.clone();

    assert_eq!(doc.delete_block(&id), DeleteOutcome::Cleared);
    assert_eq!(doc.sections[0].blocks.len(), 1);
    assert_eq!(doc.sections[0].blocks[0].id, id);
    assert_eq!(
        doc.sections[0].blocks[0].kind,
        BlockKind::Heading {
            content: String::new(),
            level: HeadingLevel::H3,
            align: Align::Right,
        }
    );
}

#[test]
fn deleting_removes_when_siblings_exist() {
    let mut doc = TrainingDocument::new(vec![section_with(vec![
        BlockKind::text("a"),
        BlockKind::text("b"),
    ])]);
    let id = doc.sections[0].blocks[0].id.clone();
    assert_eq!(doc.delete_block(&id), DeleteOutcome::Removed);
    assert_eq!(doc.sections[0].blocks.len(), 1);
    assert_eq!(doc.delete_block(&id), DeleteOutcome::NotFound);
}

#[test]
fn move_first_block_up_is_identity() {
    let mut doc = TrainingDocument::new(vec![section_with(vec![
        BlockKind::text("a"),
        BlockKind::text("b"),
    ])]);
    let before = doc.clone();
    let first = doc.sections[0].blocks[0].id.clone();
    assert!(!doc.move_block(&first, Direction::Up));
    assert_eq!(doc, before);
}

#[test]
fn move_block_swaps_within_section_only() {
    let mut doc = TrainingDocument::new(vec![
        section_with(vec![BlockKind::text("a"), BlockKind::text("b")]),
        section_with(vec![BlockKind::text("c")]),
    ]);
    let order = ids(&doc.sections[0]);
    assert!(doc.move_block(&order[0], Direction::Down));
    assert_eq!(ids(&doc.sections[0]), vec![order[1].clone(), order[0].clone()]);

    // last block of the first section does not fall into the second
    assert!(!doc.move_block(&order[0], Direction::Down));
    assert_eq!(doc.sections[1].blocks.len(), 1);
}

#[test]
fn sections_reorder_and_keep_at_least_one() {
    let mut doc = TrainingDocument::placeholder();
    let first = doc.sections[0].id.clone();
    let second = doc.add_section("Extra");

    assert!(doc.move_section(&second, Direction::Up));
    assert_eq!(doc.sections[0].id, second);
    assert!(!doc.move_section(&second, Direction::Up));

    assert!(doc.rename_section(&first, "Renomeada"));
    assert!(doc.remove_section(&second));
    assert!(!doc.remove_section(&first));
    assert_eq!(doc.sections.len(), 1);
    assert_eq!(doc.sections[0].title, "Renomeada");
}

#[test]
fn document_serializes_as_plain_array() {
    let doc = TrainingDocument::placeholder();
    let json = serde_json::to_value(&doc).unwrap();
    let sections = json.as_array().unwrap();
    assert_eq!(sections.len(), 1);
    assert_eq!(sections[0]["title"], "Conteúdo Principal");
    assert_eq!(sections[0]["blocks"][0]["type"], "text");

    let back: TrainingDocument = serde_json::from_value(json).unwrap();
    assert_eq!(back, doc);
}

#[test]
fn patch_level_out_of_range_is_clamped() {
    let patch: BlockPatch = serde_json::from_str(r#"{"level": 42}"#).unwrap();
    assert_eq!(patch.level, Some(HeadingLevel::H3));

    let patch: BlockPatch = serde_json::from_str(r#"{"level": -5}"#).unwrap();
    assert_eq!(patch.level, Some(HeadingLevel::H1));
}
