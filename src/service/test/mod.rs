mod guest;
mod table;
