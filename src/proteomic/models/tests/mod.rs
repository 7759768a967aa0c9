mod diff_entry;
