//! Process exit codes for `tripwise` failures, taken from BSD sysexits.h

/// Bad arguments, e.g. `check` on a file that does not exist
pub const USAGE: i32 = 64;

/// Tree file is empty or its first line is not a `Q:`/`A:` record
pub const DATAERR: i32 = 65;

/// No tree loaded when one was needed, or input ended mid-session
pub const NOINPUT: i32 = 66;

/// Tree could not be modified (learning on a non-leaf)
pub const SOFTWARE: i32 = 70;

/// Reading or writing a tree file, or the terminal, failed
pub const IOERR: i32 = 74;

/// Settings file or `TRIPWISE_*` variables could not be read
pub const CONFIG: i32 = 78;
