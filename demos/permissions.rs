use eflags::{flag_set, impl_flag, FlagSet, FromPrimitive};

#[derive(Debug, Clone, Copy, PartialEq, Eq, FromPrimitive)]
#[repr(u16)]
enum Permission {
    Read = 1 << 0,
    Write = 1 << 1,
    Execute = 1 << 2,
    Share = 1 << 8,
}

impl_flag!(Permission => u16);

fn describe(name: &str, permissions: FlagSet<Permission>) {
    let granted: Vec<_> = permissions.iter().collect();
    println!("{name}: {permissions:?} {granted:?}");
}

fn main() {
    let mut owner = flag_set![Permission::Read, Permission::Write, Permission::Execute];
    owner.set(Permission::Share);
    describe("owner", owner);

    let mut guest = owner;
    guest.reset(Permission::Write | Permission::Execute | Permission::Share);
    describe("guest", guest);

    let writable = Permission::Write | Permission::Execute;
    println!(
        "guest may modify: {}, guest has every write bit: {}",
        guest.has_flag(writable),
        guest.contains(writable)
    );

    match FlagSet::<Permission>::from_bits(0b1_0000_0011) {
        Ok(stored) => describe("restored", stored),
        Err(err) => println!("could not restore permissions: {err}"),
    }

    match FlagSet::<Permission>::from_bits(0b1000) {
        Ok(stored) => describe("restored", stored),
        Err(err) => println!("could not restore permissions: {err}"),
    }
}
