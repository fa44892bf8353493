use pretty_assertions::assert_eq;
use questlab_model::{Inventory, Item, Quest, QuestLog};
use questlab_ui::{Canvas, Dialog, FormModel, MenuBar, Rule, TableModel, Tool, TreeModel, UiError, View};
use std::cell::Cell;
use std::rc::Rc;

// ── Table ────────────────────────────────────────────────────────

fn loot_table() -> TableModel {
    let mut table = TableModel::new("Loot", ["Name", "Value"]);
    table.append_row(["Sword", "120"]).unwrap();
    table.append_row(["Rope", "8"]).unwrap();
    table.append_row(["Ruby", "75"]).unwrap();
    table
}

#[test]
fn table_rejects_wrong_column_count() {
    let mut table = loot_table();
    assert_eq!(
        table.append_row(["Shield"]),
        Err(UiError::ColumnCount {
            expected: 2,
            got: 1
        })
    );
    assert_eq!(table.row_count(), 3);
}

#[test]
fn table_sorts_numbers_numerically() {
    let mut table = loot_table();
    table.sort_by_column("value", true).unwrap();
    let names: Vec<&str> = (0..3).filter_map(|i| table.cell(i, "Name")).collect();
    assert_eq!(names, ["Rope", "Ruby", "Sword"]);

    table.sort_by_column("Value", false).unwrap();
    assert_eq!(table.cell(0, "Name"), Some("Sword"));
    assert_eq!(
        table.sort_by_column("Weight", true),
        Err(UiError::UnknownColumn("Weight".into()))
    );
}

#[test]
fn table_selection_follows_its_row() {
    let mut table = loot_table();
    table.select(2).unwrap();
    table.sort_by_column("Name", true).unwrap();
    assert_eq!(table.selected_index(), Some(1));
    assert_eq!(table.selected().unwrap()[0], "Ruby");

    table.remove_row(0).unwrap();
    assert_eq!(table.selected().unwrap()[0], "Ruby");
    table.remove_row(0).unwrap();
    assert_eq!(table.selected(), None);

    assert_eq!(
        table.select(5),
        Err(UiError::RowOutOfRange { index: 5, len: 1 })
    );
}

#[test]
fn table_render_marks_selection() {
    let mut table = loot_table();
    table.select(1).unwrap();
    assert_eq!(
        table.render(),
        "  Name  | Value\n  Sword | 120\n> Rope  | 8\n  Ruby  | 75"
    );
}

#[test]
fn table_from_inventory() {
    let mut inventory = Inventory::with_capacity(5);
    inventory.add(Item::weapon("Sword", 120, 12)).unwrap();
    inventory.add(Item::potion("Elixir", 30, 25)).unwrap();
    let table = TableModel::from_inventory(&inventory);
    assert_eq!(table.columns(), ["Name", "Kind", "Value", "Weight"]);
    assert_eq!(table.row(1).unwrap(), ["Elixir", "potion", "30", "0.2"]);
}

// ── Tree ─────────────────────────────────────────────────────────

#[test]
fn tree_paths_and_flattening() {
    let mut tree = TreeModel::new("World");
    let root = tree.root();
    let town = tree.add_child(root, "Town").unwrap();
    let inn = tree.add_child(town, "Inn").unwrap();
    tree.add_child(root, "Forest").unwrap();

    assert_eq!(tree.path_to(inn).unwrap(), ["World", "Town", "Inn"]);
    assert_eq!(tree.find("Inn"), Some(inn));
    assert_eq!(tree.parent(inn).unwrap(), Some(town));

    let depths: Vec<usize> = tree.flatten().into_iter().map(|(d, _)| d).collect();
    assert_eq!(depths, [0, 1, 2, 1]);

    assert!(!tree.toggle(town).unwrap());
    assert_eq!(tree.flatten().len(), 3);
    assert_eq!(tree.render(), "- World\n  + Town\n    Forest");
    // Hidden nodes are still found.
    assert_eq!(tree.find("Inn"), Some(inn));
}

#[test]
fn tree_from_quest_log_groups_by_status() {
    let mut log = QuestLog::new();
    let rats = log.accept(Quest::new("Rat Cellar", 5, 10)).unwrap();
    log.accept(Quest::new("Lost Ring", 1, 50)).unwrap();
    log.advance(rats, 2).unwrap();
    let ring = log.find_by_title("Lost Ring").unwrap().id;
    log.advance(ring, 1).unwrap();

    let tree = TreeModel::from_quest_log(&log);
    assert_eq!(
        tree.render(),
        "- Quests\n  - Active\n      Rat Cellar (2/5)\n  - Completed\n      Lost Ring (1/1)"
    );
}

// ── Canvas ───────────────────────────────────────────────────────

#[test]
fn canvas_draws_and_hit_tests() {
    let mut canvas = Canvas::new(100, 50);
    assert_eq!(canvas.draw_at(20.0, 20.0).unwrap(), 0);
    canvas.set_tool(Tool::Square { side: 10.0 });
    assert_eq!(canvas.draw_at(25.0, 20.0).unwrap(), 1);

    assert_eq!(canvas.hit_test(24.0, 22.0), Some(1));
    assert_eq!(canvas.hit_test(12.0, 20.0), Some(0));
    assert_eq!(canvas.hit_test(90.0, 40.0), None);

    assert_eq!(
        canvas.draw_at(120.0, 10.0),
        Err(UiError::OutOfBounds { x: 120, y: 10 })
    );
    assert_eq!(canvas.shapes().len(), 2);
}

#[test]
fn canvas_undo_restores_cleared_shapes() {
    let mut canvas = Canvas::new(100, 100);
    canvas.draw_at(5.0, 5.0).unwrap();
    canvas.draw_at(50.0, 50.0).unwrap();
    assert_eq!(canvas.clear(), 2);
    assert!(canvas.shapes().is_empty());

    assert!(canvas.undo());
    assert_eq!(canvas.shapes().len(), 2);
    assert!(canvas.undo());
    assert_eq!(canvas.shapes().len(), 1);
    assert_eq!(
        canvas.render(),
        "100x100 canvas, 1 shape(s)\n  circle r=10 at (5, 5)"
    );
    assert!(canvas.undo());
    assert!(!canvas.undo());
}

// ── Menu ─────────────────────────────────────────────────────────

#[test]
fn menu_triggers_bound_callbacks() {
    let saves = Rc::new(Cell::new(0));
    let mut menu = MenuBar::new();
    let counter = Rc::clone(&saves);
    menu.bind("File/Save", Some("Ctrl+S"), move || {
        counter.set(counter.get() + 1);
        format!("Saved ({})", counter.get())
    })
    .unwrap();
    menu.bind("File/New", None, || "New game".to_string()).unwrap();
    menu.bind("Help/About", None, || "Questlab".to_string()).unwrap();

    assert_eq!(menu.trigger("File/Save").unwrap(), "Saved (1)");
    assert_eq!(menu.trigger_shortcut("Ctrl+S").unwrap(), "Saved (2)");
    assert_eq!(saves.get(), 2);
    assert_eq!(menu.paths(), ["File/Save", "File/New", "Help/About"]);
}

#[test]
fn menu_errors() {
    let mut menu = MenuBar::new();
    menu.bind("File/Quit", None, || "Bye".to_string()).unwrap();
    assert_eq!(
        menu.trigger("File/Open"),
        Err(UiError::UnknownAction("File/Open".into()))
    );
    assert_eq!(
        menu.bind("Quit", None, String::new),
        Err(UiError::InvalidMenuPath("Quit".into()))
    );

    menu.set_enabled("File/Quit", false).unwrap();
    assert_eq!(
        menu.trigger("File/Quit"),
        Err(UiError::ActionDisabled("File/Quit".into()))
    );
    assert_eq!(menu.render(), "File: [Quit]");
}

// ── Form ─────────────────────────────────────────────────────────

#[test]
fn form_submits_trimmed_values() {
    let mut form = FormModel::new_character();
    form.set("name", "  Aria ").unwrap();
    form.set("class", "Mage").unwrap();
    form.set("health", "90").unwrap();

    let values = form.submit().unwrap();
    assert_eq!(values["name"], "Aria");
    assert_eq!(values["health"], "90");
}

#[test]
fn form_reports_every_failure() {
    let mut form = FormModel::new_character();
    form.set("class", "bard").unwrap();
    form.set("health", "abc").unwrap();

    let dialog: Dialog = form.submit().unwrap_err();
    assert!(dialog.is_error());
    assert_eq!(dialog.title, "New Character: invalid input");
    assert_eq!(
        dialog.message,
        "Name is required\n\
         Class \"bard\" is not one of warrior, mage, archer\n\
         Starting health \"abc\" is not a whole number"
    );
}

#[test]
fn form_range_and_length_rules() {
    let mut form = FormModel::new("Test")
        .field("level", "Level", vec![Rule::Integer { min: 1, max: 10 }])
        .field("tag", "Tag", vec![Rule::MaxLength(3)]);
    form.set("level", "11").unwrap();
    form.set("tag", "abcd").unwrap();
    assert_eq!(
        form.errors(),
        [
            "Level must be between 1 and 10, got 11",
            "Tag must be at most 3 characters"
        ]
    );

    // Optional fields may stay empty.
    form.reset();
    assert!(form.submit().is_ok());
    assert_eq!(
        form.set("nope", "x"),
        Err(UiError::UnknownField("nope".into()))
    );
}
