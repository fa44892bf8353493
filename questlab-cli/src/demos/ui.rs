use super::DemoContext;
use questlab_model::{Inventory, Item, Quest, QuestLog};
use questlab_ui::{
    Calculator, Canvas, Counter, Dialog, FormModel, Key, MenuBar, ProgressBar, ProgressWorker,
    TableModel, Tool, TreeModel, View, WorkerOutcome,
};
use std::cell::RefCell;
use std::io::Write;
use std::rc::Rc;
use std::time::Duration;

fn show(ctx: &mut DemoContext<'_>, view: &dyn View) -> anyhow::Result<()> {
    writeln!(ctx.out, "[{}]", view.title())?;
    for line in view.render().lines() {
        writeln!(ctx.out, "  {line}")?;
    }
    Ok(())
}

fn pop_up(ctx: &mut DemoContext<'_>, dialog: &Dialog) -> anyhow::Result<()> {
    writeln!(ctx.out, "{dialog}")?;
    Ok(())
}

pub(super) fn counter(ctx: &mut DemoContext<'_>) -> anyhow::Result<()> {
    let mut counter = Counter::default();
    for _ in 0..3 {
        counter.increment();
    }
    counter.decrement();
    show(ctx, &counter)?;
    counter.reset();
    writeln!(ctx.out, "After reset: {}", counter.value())?;
    Ok(())
}

pub(super) fn calculator(ctx: &mut DemoContext<'_>) -> anyhow::Result<()> {
    let mut calc = Calculator::new();
    for (keys, note) in [
        ("2+3=", "simple sum"),
        ("c12*3-4=", "chained, left to right"),
        ("c8+-*2=", "repeated operators, the last one wins"),
        ("c7/2=", "a fraction"),
    ] {
        for key in keys.chars().filter_map(Key::from_char) {
            if let Some(dialog) = calc.click(key) {
                pop_up(ctx, &dialog)?;
            }
        }
        writeln!(ctx.out, "{keys:<12} -> {:<6} ({note})", calc.display())?;
    }

    calc.click(Key::Clear);
    for key in "10/0".chars().filter_map(Key::from_char) {
        calc.click(key);
    }
    if let Some(dialog) = calc.click(Key::Equals) {
        pop_up(ctx, &dialog)?;
    }
    writeln!(ctx.out, "Still showing: {}", calc.render())?;
    Ok(())
}

pub(super) fn table(ctx: &mut DemoContext<'_>) -> anyhow::Result<()> {
    let mut inventory = Inventory::with_capacity(ctx.config.inventory_capacity.max(4));
    for item in [
        Item::weapon("Iron Sword", 40, 8).with_weight(3.0),
        Item::potion("Healing Draught", 25, 30),
        Item::misc("Rope", 3).with_weight(2.0),
        Item::misc("Ruby", 75).with_weight(0.1),
    ] {
        inventory.add(item)?;
    }
    let mut table = TableModel::from_inventory(&inventory);
    table.select(2)?;
    table.sort_by_column("Value", false)?;
    show(ctx, &table)?;

    if let Err(e) = table.append_row(["Shield", "armor"]) {
        pop_up(ctx, &Dialog::warning("Inventory", e.to_string()))?;
    }
    if let Some(row) = table.selected() {
        writeln!(ctx.out, "Selection followed the sort: {}", row.join(", "))?;
    }
    Ok(())
}

pub(super) fn tree(ctx: &mut DemoContext<'_>) -> anyhow::Result<()> {
    let mut log = QuestLog::new();
    let rats = log.accept(Quest::new("Rat Cellar", 3, 15))?;
    log.accept(Quest::new("Lost Ring", 1, 50))?;
    let wolves = log.accept(Quest::new("Wolf Pack", 5, 40))?;
    log.advance(rats, 3)?;
    log.advance(wolves, 2)?;

    let mut tree = TreeModel::from_quest_log(&log);
    show(ctx, &tree)?;

    if let Some(done) = tree.find("Completed") {
        tree.collapse(done)?;
    }
    show(ctx, &tree)?;
    if let Some(node) = tree.find("Wolf Pack (2/5)") {
        writeln!(ctx.out, "Path: {}", tree.path_to(node)?.join(" > "))?;
    }
    Ok(())
}

pub(super) fn canvas(ctx: &mut DemoContext<'_>) -> anyhow::Result<()> {
    let mut canvas = Canvas::new(200, 100);
    canvas.draw_at(20.0, 20.0)?;
    canvas.set_tool(Tool::Square { side: 30.0 });
    canvas.draw_at(60.0, 40.0)?;
    canvas.draw_at(70.0, 45.0)?;
    show(ctx, &canvas)?;

    match canvas.hit_test(65.0, 42.0) {
        Some(i) => writeln!(ctx.out, "Clicked shape #{i}")?,
        None => writeln!(ctx.out, "Clicked empty space")?,
    }
    if let Err(e) = canvas.draw_at(250.0, 10.0) {
        writeln!(ctx.out, "Ignored click: {e}")?;
    }

    let cleared = canvas.clear();
    writeln!(ctx.out, "Cleared {cleared} shape(s)")?;
    canvas.undo();
    canvas.undo();
    show(ctx, &canvas)?;
    Ok(())
}

pub(super) fn menu(ctx: &mut DemoContext<'_>) -> anyhow::Result<()> {
    let saves = Rc::new(RefCell::new(0u32));
    let mut menu = MenuBar::new();
    menu.bind("File/New", Some("Ctrl+N"), || "Started a new game".to_string())?;
    let counter = Rc::clone(&saves);
    menu.bind("File/Save", Some("Ctrl+S"), move || {
        *counter.borrow_mut() += 1;
        format!("Saved to slot {}", counter.borrow())
    })?;
    menu.bind("Help/About", None, || "Questlab, a course in Rust".to_string())?;
    menu.set_enabled("File/New", false)?;
    show(ctx, &menu)?;

    for path in ["File/Save", "File/New", "Edit/Undo"] {
        match menu.trigger(path) {
            Ok(status) => writeln!(ctx.out, "{path}: {status}")?,
            Err(e) => writeln!(ctx.out, "{path}: {e}")?,
        }
    }
    writeln!(ctx.out, "Ctrl+S: {}", menu.trigger_shortcut("Ctrl+S")?)?;
    writeln!(ctx.out, "Saved {} time(s)", saves.borrow())?;
    Ok(())
}

pub(super) fn form(ctx: &mut DemoContext<'_>) -> anyhow::Result<()> {
    let mut form = FormModel::new_character();
    form.set("class", "bard")?;
    form.set("health", "lots")?;
    show(ctx, &form)?;
    if let Err(dialog) = form.submit() {
        pop_up(ctx, &dialog)?;
    }

    form.set("name", "Aria")?;
    form.set("class", "Mage")?;
    form.set("health", ctx.config.starting_health.min(200).to_string())?;
    match form.submit() {
        Ok(values) => {
            let fields: Vec<String> = values.iter().map(|(k, v)| format!("{k}={v}")).collect();
            writeln!(ctx.out, "Created: {}", fields.join(", "))?;
        }
        Err(dialog) => pop_up(ctx, &dialog)?,
    }
    Ok(())
}

pub(super) fn progress(ctx: &mut DemoContext<'_>) -> anyhow::Result<()> {
    let (frames, outcome, closed) = ctx.block_on(async {
        let mut frames = Vec::new();

        // A full run.
        let (worker, mut rx) = ProgressWorker::spawn(4, Duration::from_millis(5));
        let mut bar = ProgressBar::new();
        while let Some(signal) = rx.recv().await {
            bar.apply(signal);
            frames.push(bar.render());
        }
        let outcome = worker.join().await;

        // Closing the window halfway through.
        let (worker, mut rx) = ProgressWorker::spawn(100, Duration::from_secs(1));
        let mut closed = ProgressBar::new();
        if let Some(signal) = rx.recv().await {
            closed.apply(signal);
        }
        worker.cancel();
        closed.follow(&mut rx).await;
        let cancelled = worker.join().await;
        (frames, outcome.and_then(|a| cancelled.map(|b| (a, b))), closed)
    })?;

    for frame in frames {
        writeln!(ctx.out, "{frame}")?;
    }
    let (full, cancelled) = outcome?;
    writeln!(ctx.out, "First worker: {}", describe(full))?;
    writeln!(ctx.out, "Second window closed: {}", closed.render())?;
    writeln!(ctx.out, "Second worker: {}", describe(cancelled))?;
    Ok(())
}

fn describe(outcome: WorkerOutcome) -> &'static str {
    match outcome {
        WorkerOutcome::Completed => "completed",
        WorkerOutcome::Cancelled => "stopped early",
    }
}
