//! Integrity checks over the built-in catalog.
//!
//! The catalog is hand-maintained data; these tests keep edits honest.

use std::collections::HashSet;

use gompa_core::Catalog;

fn assert_unique_ids<'a>(ids: impl Iterator<Item = &'a str>, what: &str) {
    let mut seen = HashSet::new();
    for id in ids {
        assert!(!id.is_empty(), "{} has an empty id", what);
        assert!(seen.insert(id), "duplicate {} id: {}", what, id);
    }
}

#[test]
fn ids_are_unique_within_each_collection() {
    let catalog = Catalog::builtin();
    assert_unique_ids(catalog.monasteries().iter().map(|m| m.id.as_str()), "monastery");
    assert_unique_ids(catalog.festivals().iter().map(|f| f.id.as_str()), "festival");
    assert_unique_ids(catalog.homestays().iter().map(|h| h.id.as_str()), "homestay");
    assert_unique_ids(catalog.workshops().iter().map(|w| w.id.as_str()), "workshop");
    assert_unique_ids(catalog.guides().iter().map(|g| g.id.as_str()), "guide");
    assert_unique_ids(
        catalog.volunteer_roles().iter().map(|v| v.id.as_str()),
        "volunteer role",
    );
}

#[test]
fn every_festival_names_a_catalog_monastery() {
    let catalog = Catalog::builtin();
    let names: HashSet<&str> = catalog
        .monasteries()
        .iter()
        .map(|m| m.name.as_str())
        .collect();

    for festival in catalog.festivals() {
        assert!(
            names.contains(festival.monastery.as_str()),
            "festival {} references unknown monastery {:?}",
            festival.id,
            festival.monastery
        );
    }
}

#[test]
fn every_monastery_has_images_and_etiquette() {
    let catalog = Catalog::builtin();
    for monastery in catalog.monasteries() {
        assert!(
            !monastery.images.is_empty(),
            "{} has no gallery images",
            monastery.id
        );
        assert!(!monastery.etiquette.dress.is_empty(), "{}: dress rules", monastery.id);
        assert!(
            !monastery.etiquette.behavior.is_empty(),
            "{}: behavior rules",
            monastery.id
        );
        assert!(
            !monastery.etiquette.photography.is_empty(),
            "{}: photography rules",
            monastery.id
        );
    }
}

#[test]
fn every_monastery_has_detail_prose_and_a_story() {
    let catalog = Catalog::builtin();
    for monastery in catalog.monasteries() {
        assert!(!monastery.description.is_empty(), "{}: description", monastery.id);
        assert!(!monastery.history.is_empty(), "{}: history", monastery.id);
        assert!(!monastery.significance.is_empty(), "{}: significance", monastery.id);
        assert!(
            !monastery.audio_story.narrator.is_empty(),
            "{}: story narrator",
            monastery.id
        );
        assert!(
            !monastery.audio_story.chant.is_empty(),
            "{}: story chant",
            monastery.id
        );
    }
}

#[test]
fn guides_have_languages_specialties_and_phone() {
    let catalog = Catalog::builtin();
    for guide in catalog.guides() {
        assert!(!guide.languages.is_empty(), "{}: languages", guide.id);
        assert!(!guide.specialties.is_empty(), "{}: specialties", guide.id);
        assert!(!guide.phone.is_empty(), "{}: phone", guide.id);
        assert!(guide.rating > 0.0 && guide.rating <= 5.0, "{}: rating", guide.id);
    }
}

#[test]
fn emergency_contacts_are_dialable() {
    let catalog = Catalog::builtin();
    assert!(!catalog.emergency_contacts().is_empty());
    for contact in catalog.emergency_contacts() {
        assert!(!contact.label.is_empty());
        assert!(!contact.number.is_empty());
    }
}
