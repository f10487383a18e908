// Copyright (c) 2026 Fopbook Maintainers.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{value_parser, Arg, ArgAction, Command};

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

pub fn build_cli() -> Command {
    Command::new("fopbook")
        .about("Income tracking and single-tax math for Ukrainian FOP entrepreneurs")
        .version(clap::crate_version!())
        .subcommand_required(false)
        .subcommand(Command::new("init").about("Initialize the local database"))
        .subcommand(
            Command::new("user")
                .about("Active user management")
                .subcommand(
                    Command::new("login")
                        .about("Set the active user, creating a default profile if needed")
                        .arg(Arg::new("id").required(true).help("Stable user id"))
                        .arg(Arg::new("name").long("name").help("Display name")),
                )
                .subcommand(Command::new("logout").about("Clear the active user"))
                .subcommand(Command::new("whoami").about("Print the active user id")),
        )
        .subcommand(
            Command::new("profile")
                .about("FOP registration profile")
                .subcommand(json_flags(
                    Command::new("show").about("Show the active user's profile"),
                ))
                .subcommand(
                    Command::new("set")
                        .about("Update profile fields; setting the group completes onboarding")
                        .arg(
                            Arg::new("group")
                                .long("group")
                                .value_parser(value_parser!(i64))
                                .help("FOP group: 1, 2 or 3"),
                        )
                        .arg(
                            Arg::new("tax-rate")
                                .long("tax-rate")
                                .value_parser(value_parser!(i64))
                                .help("Single-tax rate for group 3: 5 or 3 (3 implies VAT)"),
                        )
                        .arg(Arg::new("name").long("name").help("Display name"))
                        .arg(Arg::new("email").long("email").help("Contact email"))
                        .arg(
                            Arg::new("employees")
                                .long("employees")
                                .value_parser(value_parser!(bool))
                                .help("Whether the FOP has employees (informational)"),
                        ),
                ),
        )
        .subcommand(
            Command::new("income")
                .about("Book of income")
                .subcommand(
                    Command::new("add")
                        .about("Record an income; foreign currency is converted at the NBU rate")
                        .arg(Arg::new("amount").long("amount").required(true))
                        .arg(Arg::new("date").long("date").help("YYYY-MM-DD, default today"))
                        .arg(
                            Arg::new("currency")
                                .long("currency")
                                .default_value("UAH")
                                .help("UAH, USD or EUR"),
                        )
                        .arg(
                            Arg::new("description")
                                .long("description")
                                .default_value(""),
                        )
                        .arg(Arg::new("client").long("client").help("Client or project"))
                        .arg(Arg::new("category").long("category"))
                        .arg(Arg::new("comment").long("comment"))
                        .arg(
                            Arg::new("attach")
                                .long("attach")
                                .action(ArgAction::Append)
                                .help("Attachment reference; may repeat"),
                        )
                        .arg(
                            Arg::new("source")
                                .long("source")
                                .default_value("manual")
                                .help("manual or ai-scan"),
                        ),
                )
                .subcommand(json_flags(
                    Command::new("list")
                        .about("List incomes, newest first")
                        .arg(Arg::new("month").long("month").help("Filter by YYYY-MM"))
                        .arg(
                            Arg::new("limit")
                                .long("limit")
                                .value_parser(value_parser!(usize)),
                        ),
                ))
                .subcommand(json_flags(
                    Command::new("show")
                        .about("Show one income record")
                        .arg(Arg::new("id").required(true)),
                ))
                .subcommand(
                    Command::new("edit")
                        .about("Edit a record (recreated under the same id)")
                        .arg(Arg::new("id").required(true))
                        .arg(Arg::new("amount").long("amount"))
                        .arg(Arg::new("date").long("date"))
                        .arg(Arg::new("currency").long("currency"))
                        .arg(Arg::new("description").long("description"))
                        .arg(
                            Arg::new("client")
                                .long("client")
                                .help("Client or project; pass '' to clear"),
                        )
                        .arg(
                            Arg::new("category")
                                .long("category")
                                .help("Category; pass '' to clear"),
                        )
                        .arg(
                            Arg::new("comment")
                                .long("comment")
                                .help("Comment; pass '' to clear"),
                        )
                        .arg(
                            Arg::new("source")
                                .long("source")
                                .help("manual or ai-scan"),
                        )
                        .arg(
                            Arg::new("attach")
                                .long("attach")
                                .action(ArgAction::Append)
                                .help("Replace attachments; a single '' clears them"),
                        ),
                )
                .subcommand(
                    Command::new("rm")
                        .about("Delete a record")
                        .arg(Arg::new("id").required(true)),
                ),
        )
        .subcommand(
            Command::new("rates")
                .about("NBU exchange rates")
                .subcommand(Command::new("today").about("Current USD and EUR rates"))
                .subcommand(
                    Command::new("get")
                        .about("Rate for a currency on a date")
                        .arg(Arg::new("currency").long("currency").required(true))
                        .arg(Arg::new("date").long("date").required(true)),
                )
                .subcommand(
                    Command::new("convert")
                        .about("Convert an amount to UAH at the rate for a date")
                        .arg(Arg::new("amount").long("amount").required(true))
                        .arg(Arg::new("currency").long("currency").required(true))
                        .arg(Arg::new("date").long("date").required(true)),
                ),
        )
        .subcommand(json_flags(
            Command::new("summary")
                .about("Income, tax breakdown, net income and limit usage for a period")
                .arg(
                    Arg::new("period")
                        .long("period")
                        .default_value("year")
                        .help("month or year"),
                ),
        ))
        .subcommand(
            Command::new("export").about("Export data").subcommand(
                Command::new("incomes")
                    .about("Export the book of income")
                    .arg(
                        Arg::new("format")
                            .long("format")
                            .default_value("csv")
                            .help("csv or json"),
                    )
                    .arg(Arg::new("out").long("out").required(true)),
            ),
        )
        .subcommand(Command::new("doctor").about("Check the book for inconsistencies"))
}
