// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use crate::config;

pub fn handle(m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("set-url", sub)) => {
            let url = sub.get_one::<String>("url").unwrap();
            config::set_api_base_url(url)?;
            println!("Store endpoint set to {}", url);
        }
        Some(("show", _)) => {
            println!("{}", config::api_base_url()?);
        }
        _ => {}
    }
    Ok(())
}
