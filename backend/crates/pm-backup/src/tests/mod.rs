mod file_restorer;
