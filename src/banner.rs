pub const BANNER: &str = r#" _____                _         _           _
|  ___| __ ___  _ __ | |_    __| | ___  ___| | __
| |_ | '__/ _ \| '_ \| __|  / _` |/ _ \/ __| |/ /
|  _|| | | (_) | | | | |_  | (_| |  __/\__ \   <
|_|  |_|  \___/|_| |_|\__|  \__,_|\___||___/_|\_\
"#;

pub const MENU_TITLE: &str = "Hotel Management System";

pub const FAREWELL: &str = "Thank you for using the Hotel Management System!";
