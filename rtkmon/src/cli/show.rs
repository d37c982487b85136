// SPDX-FileCopyrightText: Copyright © 2020-2025 Serpent OS Developers
//
// SPDX-License-Identifier: MPL-2.0

use clap::Parser;
use rtkmon::GTime;
use tui::Styled;

#[derive(Debug, Parser)]
#[command(about = "Print a time in the formats used by progress output")]
pub struct Command {
    #[arg(help = "Time to show, yyyy/mm/dd hh:mm:ss[.sss]")]
    time: GTime,
    #[arg(short, long, default_value_t = 3, help = "Fractional second digits")]
    decimals: usize,
}

pub fn handle(command: Command) {
    let Command { time, decimals } = command;
    let [year, month, day, hour, min, sec] = time.to_epoch();

    println!("{}  {}", "time".bold(), time.format(decimals));
    println!("{}  {} + {:.9}", "unix".bold(), time.time, time.sec);
    println!("{} [{year}, {month}, {day}, {hour}, {min}, {sec:.decimals$}]", "epoch".bold());
}
