// Output formatting — colored terminal display of analysis results.

pub mod terminal;
