use std::collections::HashSet;

use proptest::prelude::*;

use aria_console::models::{PersonaConfig, ToolDefinition, Voice};
use aria_console::store::SettingsStore;

fn store_from_names(names: &HashSet<String>) -> SettingsStore {
    SettingsStore::new(
        PersonaConfig::default(),
        "general".to_string(),
        names
            .iter()
            .map(|n| ToolDefinition::blank(n.clone()))
            .collect(),
    )
}

fn name_is_unique(store: &SettingsStore) -> bool {
    let mut seen = HashSet::new();
    store.tools().iter().all(|t| seen.insert(t.name.clone()))
}

proptest! {
    #[test]
    fn toggle_twice_returns_original_state(
        names in prop::collection::hash_set("[a-z_]{1,12}", 1..8),
        pick in any::<prop::sample::Index>(),
    ) {
        let mut store = store_from_names(&names);
        let target = store.tools()[pick.index(store.tools().len())].name.clone();
        let before = store.tool(&target).unwrap().is_enabled;

        prop_assert!(store.toggle_tool(&target));
        prop_assert!(store.toggle_tool(&target));
        prop_assert_eq!(store.tool(&target).unwrap().is_enabled, before);
    }

    #[test]
    fn replace_by_name_preserves_length_and_uniqueness(
        names in prop::collection::hash_set("[a-z_]{1,12}", 1..8),
        pick in any::<prop::sample::Index>(),
        new_name in "[A-Z]{1,12}",
        description in ".{0,40}",
    ) {
        let mut store = store_from_names(&names);
        let len_before = store.tools().len();
        let target = store.tools()[pick.index(len_before)].name.clone();

        // Uppercase replacement names cannot collide with the lowercase pool.
        let mut replacement = ToolDefinition::blank(new_name.clone());
        replacement.description = description;
        store.update_tool(&target, replacement).unwrap();

        prop_assert_eq!(store.tools().len(), len_before);
        prop_assert!(name_is_unique(&store));
        prop_assert!(store.tool(&new_name).is_some());
    }

    #[test]
    fn persona_updates_are_field_scoped(
        names in prop::collection::hash_set("[a-z_]{1,12}", 0..8),
        persona_name in ".{0,30}",
        prompt in ".{0,200}",
    ) {
        let mut store = store_from_names(&names);
        let tools_before = store.tools().to_vec();

        store.set_persona_name(persona_name);
        store.set_system_prompt(prompt);
        store.set_voice(Voice::Aoede);

        prop_assert_eq!(store.tools(), tools_before.as_slice());
    }
}
