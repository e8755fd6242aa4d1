use std::io::BufRead;

use log::info;

use super::input::InputReader;
use super::ui;
use crate::config::FieldLimits;
use crate::errors::RentdeskResult;
use crate::models::record::{RecordDraft, RecordPatch};
use crate::store::PropertyStore;

/// Reserved id answer meaning "abort, back to the menu"
const CANCEL_SENTINEL: i64 = -1;
/// Reserved rent answer meaning "keep the current rent"
const KEEP_RENT_SENTINEL: i64 = -1;

/// One entry of the main menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    Find,
    Delete,
    Update,
    List,
    Exit,
}

impl MenuChoice {
    /// Map a typed digit onto its menu entry
    pub fn from_key(key: char) -> Option<Self> {
        match key {
            '1' => Some(Self::Add),
            '2' => Some(Self::Find),
            '3' => Some(Self::Delete),
            '4' => Some(Self::Update),
            '5' => Some(Self::List),
            '6' => Some(Self::Exit),
            _ => None,
        }
    }
}

/// The interactive command loop
///
/// Renders the menu, reads a choice, runs the matching flow, and
/// repeats until the user confirms exit. All record access goes
/// through the store; all console reads go through the one reader.
pub struct MenuController<R> {
    store: PropertyStore,
    input: InputReader<R>,
    limits: FieldLimits,
}

impl<R: BufRead> MenuController<R> {
    pub fn new(store: PropertyStore, input: InputReader<R>, limits: FieldLimits) -> Self {
        Self {
            store,
            input,
            limits,
        }
    }

    /// Run until exit is confirmed (or the input source closes)
    pub fn run(&mut self) -> RentdeskResult<()> {
        loop {
            self.render_menu();
            match self.input.read_menu_choice()? {
                MenuChoice::Add => self.add_record()?,
                MenuChoice::Find => self.find_record()?,
                MenuChoice::Delete => self.delete_record()?,
                MenuChoice::Update => self.update_record()?,
                MenuChoice::List => self.list_records(),
                MenuChoice::Exit => {
                    if self.confirm_exit()? {
                        info!("exit confirmed, leaving the menu loop");
                        return Ok(());
                    }
                }
            }
        }
    }

    /// The store behind the session, for inspection once the loop ends
    pub fn store(&self) -> &PropertyStore {
        &self.store
    }

    fn render_menu(&self) {
        ui::print_header("Rentdesk - rental property records");
        println!("\t1 Add a record");
        println!("\t2 Find a record");
        println!("\t3 Delete a record");
        println!("\t4 Update a record");
        println!("\t5 List all records");
        println!("\t6 Exit");
        ui::prompt("Select (1-6):");
    }

    fn add_record(&mut self) -> RentdeskResult<()> {
        ui::print_banner("Add a record");
        ui::prompt("Owner name:");
        let owner = self.input.read_string(self.limits.owner, None)?;
        ui::prompt("Phone:");
        let phone = self.input.read_string(self.limits.phone, None)?;
        ui::prompt("Address:");
        let address = self.input.read_string(self.limits.address, None)?;
        ui::prompt("Monthly rent:");
        let rent = self.input.read_int(None)?;
        ui::prompt("Occupancy state:");
        let state = self.input.read_string(self.limits.state, None)?;

        let draft = RecordDraft {
            owner,
            phone,
            address,
            rent,
            state,
        };
        match self.store.insert(draft) {
            Ok(id) => {
                info!("record {} added", id);
                ui::print_success(&format!("record {id:02} added"));
            }
            Err(err) => ui::print_error(&err.to_string()),
        }
        Ok(())
    }

    fn find_record(&mut self) -> RentdeskResult<()> {
        ui::print_banner("Find a record");
        ui::prompt("Record id:");
        let id = self.input.read_int(None)?;
        match id_as_key(id).and_then(|id| self.store.find(id)) {
            Some(record) => println!("{record}"),
            None => ui::print_error(&format!("no record with id {id}")),
        }
        Ok(())
    }

    fn delete_record(&mut self) -> RentdeskResult<()> {
        ui::print_banner("Delete a record");
        ui::prompt("Record id (-1 to cancel):");
        let id = self.input.read_int(None)?;
        if id == CANCEL_SENTINEL {
            ui::print_info("deletion cancelled");
            return Ok(());
        }
        ui::prompt("Really delete? (Y/N):");
        if !self.input.read_confirmation()? {
            ui::print_info("deletion abandoned");
            return Ok(());
        }
        match id_as_key(id).map(|id| self.store.delete(id)) {
            Some(Ok(record)) => {
                info!("record {} deleted", record.id);
                ui::print_success(&format!("record {:02} deleted", record.id));
            }
            _ => ui::print_error(&format!("no record with id {id}, nothing deleted")),
        }
        Ok(())
    }

    fn update_record(&mut self) -> RentdeskResult<()> {
        ui::print_banner("Update a record");
        ui::prompt("Record id (-1 to cancel):");
        let id = self.input.read_int(None)?;
        if id == CANCEL_SENTINEL {
            ui::print_info("update cancelled");
            return Ok(());
        }
        let Some(current) = id_as_key(id).and_then(|id| self.store.find(id)).cloned() else {
            ui::print_error(&format!("no record with id {id}, nothing to update"));
            return Ok(());
        };

        // blank keeps the current value; -1 does the same for rent
        ui::prompt(&format!("Owner name ({}):", current.owner));
        let owner = self.input.read_string(self.limits.owner, Some(""))?;
        ui::prompt(&format!("Phone ({}):", current.phone));
        let phone = self.input.read_string(self.limits.phone, Some(""))?;
        ui::prompt(&format!("Address ({}):", current.address));
        let address = self.input.read_string(self.limits.address, Some(""))?;
        ui::prompt(&format!("Monthly rent ({}):", current.rent));
        let rent = self.input.read_int(Some(KEEP_RENT_SENTINEL))?;
        ui::prompt(&format!("Occupancy state ({}):", current.state));
        let state = self.input.read_string(self.limits.state, Some(""))?;

        let patch = RecordPatch {
            owner: (!owner.is_empty()).then_some(owner),
            phone: (!phone.is_empty()).then_some(phone),
            address: (!address.is_empty()).then_some(address),
            rent: (rent != KEEP_RENT_SENTINEL).then_some(rent),
            state: (!state.is_empty()).then_some(state),
        };
        if patch.is_empty() {
            ui::print_info("nothing changed");
            return Ok(());
        }
        match self.store.update(current.id, patch) {
            Ok(record) => {
                info!("record {} updated", record.id);
                ui::print_success(&format!("record {:02} updated", record.id));
            }
            Err(err) => ui::print_error(&err.to_string()),
        }
        Ok(())
    }

    fn list_records(&self) {
        ui::print_banner("Property listing");
        println!("id\towner\tphone\taddress\trent\tstate");
        for record in self.store.list() {
            println!("{record}");
        }
        ui::print_banner("End of listing");
    }

    fn confirm_exit(&mut self) -> RentdeskResult<bool> {
        ui::prompt("Exit rentdesk? (Y/N):");
        let confirmed = self.input.read_confirmation()?;
        if !confirmed {
            ui::print_info("staying in the menu");
        }
        Ok(confirmed)
    }
}

// User-typed ids arrive as i64; anything outside the store's key
// range can only be a miss.
fn id_as_key(id: i64) -> Option<u32> {
    u32::try_from(id).ok()
}
