// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use moneydash::{cli, commands, dashboard::Dashboard, store::HttpStore};

fn main() -> Result<()> {
    let cli = cli::build_cli();
    let matches = cli.get_matches();

    match matches.subcommand() {
        Some(("config", sub)) => commands::configure::handle(sub)?,
        Some((name, sub)) => {
            let store = HttpStore::from_config()?;
            let mut dash = Dashboard::new(store);
            match name {
                "list" => commands::list::handle(&mut dash, sub)?,
                "add" => commands::add::handle(&mut dash, sub)?,
                "edit" => commands::edit::handle(&mut dash, sub)?,
                "delete" => commands::delete::handle(&mut dash, sub)?,
                "summary" => commands::summary::handle(&mut dash, sub)?,
                "chart" => commands::chart::handle(&mut dash, sub)?,
                "export" => commands::exporter::handle(&mut dash, sub)?,
                _ => {
                    cli::build_cli().print_help()?;
                    println!();
                }
            }
        }
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
