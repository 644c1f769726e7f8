//! `userlist click <index>` – deliver a click to a rendered entry.

use anyhow::{bail, Result};
use userlist_core::app::UserList;
use userlist_core::config::UserlistConfig;
use userlist_core::interaction::ClickEvent;

pub async fn run_click(cfg: &UserlistConfig, index: usize) -> Result<()> {
    let list = UserList::from_config(cfg);
    let report = list.refresh().await?;
    super::show_alerts(list.surface());

    let Some(handle) = report.handles.get(index).copied() else {
        bail!(
            "no entry at index {} ({} rendered)",
            index,
            report.rendered()
        );
    };
    let mut event = ClickEvent::on_entry(handle);
    match list.click(&mut event) {
        Some(href) => println!("{href}"),
        None => bail!("entry {} is no longer on the page", index),
    }
    Ok(())
}
