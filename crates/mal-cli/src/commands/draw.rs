use colored::Colorize;
use comfy_table::{Cell, ContentArrangement, Table, presets::UTF8_FULL};

use mal_lottery::{DrawConfig, DrawEngine, DrawRules, Ticket};

pub fn run(count: usize, seed: Option<u64>, json: bool) -> Result<(), String> {
    let config = match seed {
        Some(seed) => DrawConfig::default().with_seed(seed),
        None => DrawConfig::default(),
    };
    let mut engine = DrawEngine::new(config);
    let tickets = engine.draw_many(count);

    if json {
        let out = serde_json::to_string_pretty(&tickets).map_err(|e| e.to_string())?;
        println!("{out}");
    } else if let [ticket] = tickets.as_slice() {
        println!("  {}", format_ticket(ticket));
    } else {
        println!("{}", ticket_table(engine.rules(), &tickets));
    }

    Ok(())
}

fn join(values: &[u32]) -> String {
    values
        .iter()
        .map(|n| format!("{n:02}"))
        .collect::<Vec<_>>()
        .join(" ")
}

fn format_ticket(ticket: &Ticket) -> String {
    format!(
        "{} {} {}",
        join(ticket.main()).bold(),
        "|".dimmed(),
        join(ticket.stars()).yellow()
    )
}

fn ticket_table(rules: &DrawRules, tickets: &[Ticket]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            "#".to_string(),
            format!("Numbers ({})", rules.main),
            format!("Stars ({})", rules.stars),
        ]);

    for (i, ticket) in tickets.iter().enumerate() {
        table.add_row(vec![
            Cell::new(i + 1),
            Cell::new(join(ticket.main())),
            Cell::new(join(ticket.stars())),
        ]);
    }
    table
}
