mod assignment;
mod group;
mod position;
mod relation;
mod specialty;
mod student;
mod teacher;
mod token_blocklist;
mod user;
