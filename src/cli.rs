// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command, value_parser};

fn json_flags(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Print as pretty JSON"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .help("Print as JSON lines"),
    )
}

fn filter_args(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("division")
            .long("division")
            .value_name("DIVISION")
            .help("PERSONAL or OFFICE (default: all)"),
    )
    .arg(
        Arg::new("category")
            .long("category")
            .value_name("CATEGORY")
            .help("Category filter (default: all)"),
    )
    .arg(
        Arg::new("from")
            .long("from")
            .value_name("YYYY-MM-DD")
            .help("Start of the date range (needs --to)"),
    )
    .arg(
        Arg::new("to")
            .long("to")
            .value_name("YYYY-MM-DD")
            .help("End of the date range (needs --from)"),
    )
}

fn field_args(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("category")
            .long("category")
            .value_name("CATEGORY"),
    )
    .arg(Arg::new("division").long("division").value_name("DIVISION"))
    .arg(
        Arg::new("from-account")
            .long("from-account")
            .value_name("ACCOUNT")
            .help("Source account (TRANSFER only)"),
    )
    .arg(
        Arg::new("to-account")
            .long("to-account")
            .value_name("ACCOUNT")
            .help("Destination account (TRANSFER only)"),
    )
    .arg(Arg::new("date").long("date").value_name("YYYY-MM-DD"))
    .arg(
        Arg::new("description")
            .long("description")
            .value_name("TEXT"),
    )
}

pub fn build_cli() -> Command {
    Command::new("moneydash")
        .about("Personal transaction dashboard over a remote ledger store")
        .subcommand(json_flags(filter_args(
            Command::new("list").about("Fetch and list transactions"),
        )))
        .subcommand(
            field_args(
                Command::new("add")
                    .about("Record a new transaction")
                    .arg(
                        Arg::new("type")
                            .long("type")
                            .value_name("TYPE")
                            .help("INCOME, EXPENSE or TRANSFER (default: EXPENSE)"),
                    )
                    .arg(
                        Arg::new("amount")
                            .long("amount")
                            .value_name("AMOUNT")
                            .required(true),
                    ),
            ),
        )
        .subcommand(
            field_args(
                Command::new("edit")
                    .about("Amend a transaction inside its 12-hour edit window")
                    .arg(Arg::new("id").long("id").value_name("ID").required(true))
                    .arg(Arg::new("type").long("type").value_name("TYPE"))
                    .arg(Arg::new("amount").long("amount").value_name("AMOUNT")),
            ),
        )
        .subcommand(
            Command::new("delete")
                .about("Delete a transaction (asks for --yes to confirm)")
                .arg(Arg::new("id").long("id").value_name("ID").required(true))
                .arg(
                    Arg::new("yes")
                        .long("yes")
                        .action(ArgAction::SetTrue)
                        .help("Confirm the deletion"),
                ),
        )
        .subcommand(json_flags(
            Command::new("summary").about("Income, expense, balance and spend ratio"),
        ))
        .subcommand(json_flags(filter_args(
            Command::new("chart")
                .about("Timeframe-bucketed aggregate series")
                .arg(
                    Arg::new("timeframe")
                        .long("timeframe")
                        .value_name("TIMEFRAME")
                        .help("WEEKLY, MONTHLY or YEARLY (default: MONTHLY)"),
                )
                .arg(
                    Arg::new("top")
                        .long("top")
                        .value_name("N")
                        .value_parser(value_parser!(usize))
                        .help("Keep only the first N buckets"),
                ),
        )))
        .subcommand(
            Command::new("export")
                .about("Export the fetched ledger to a file")
                .arg(
                    Arg::new("format")
                        .long("format")
                        .value_name("FMT")
                        .default_value("csv")
                        .help("csv or json"),
                )
                .arg(
                    Arg::new("out")
                        .long("out")
                        .value_name("PATH")
                        .required(true),
                )
                .arg(Arg::new("from").long("from").value_name("YYYY-MM-DD"))
                .arg(Arg::new("to").long("to").value_name("YYYY-MM-DD")),
        )
        .subcommand(
            Command::new("config")
                .about("Client configuration")
                .subcommand(
                    Command::new("set-url")
                        .about("Set the transaction store endpoint")
                        .arg(Arg::new("url").value_name("URL").required(true)),
                )
                .subcommand(Command::new("show").about("Print the effective endpoint")),
        )
}
