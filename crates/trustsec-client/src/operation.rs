/// Every remote operation exposed by the device management API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    ListDevices,
    AddDevice,
    DeviceDetail,
    UpdateDevice,
    ListClassTimeWindows,
    AddClassTimeWindow,
    DeleteClassTimeWindow,
    EmergencyContacts,
    SetEmergencyContacts,
    ListLocationReportWindows,
    AddLocationReportWindow,
    DeleteLocationReportWindow,
    ActivateDevice,
}

impl Operation {
    pub const ALL: [Operation; 13] = [
        Operation::ListDevices,
        Operation::AddDevice,
        Operation::DeviceDetail,
        Operation::UpdateDevice,
        Operation::ListClassTimeWindows,
        Operation::AddClassTimeWindow,
        Operation::DeleteClassTimeWindow,
        Operation::EmergencyContacts,
        Operation::SetEmergencyContacts,
        Operation::ListLocationReportWindows,
        Operation::AddLocationReportWindow,
        Operation::DeleteLocationReportWindow,
        Operation::ActivateDevice,
    ];

    /// Path suffix appended to the API endpoint.
    pub fn path(self) -> &'static str {
        match self {
            Operation::ListDevices => "/terminal_lists",
            Operation::AddDevice => "/terminal_add",
            Operation::DeviceDetail => "/terminal_info",
            Operation::UpdateDevice => "/terminal_edit",
            Operation::ListClassTimeWindows => "/disturb_lists",
            Operation::AddClassTimeWindow => "/disturb_add",
            Operation::DeleteClassTimeWindow => "/disturb_del",
            Operation::EmergencyContacts => "/terminal_key",
            Operation::SetEmergencyContacts => "/terminal_key_set",
            Operation::ListLocationReportWindows => "/locreport_lists",
            Operation::AddLocationReportWindow => "/locreport_add",
            Operation::DeleteLocationReportWindow => "/locreport_del",
            Operation::ActivateDevice => "/terminal_active",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Operation::ListDevices => "list_devices",
            Operation::AddDevice => "add_device",
            Operation::DeviceDetail => "device_detail",
            Operation::UpdateDevice => "update_device",
            Operation::ListClassTimeWindows => "list_class_time_windows",
            Operation::AddClassTimeWindow => "add_class_time_window",
            Operation::DeleteClassTimeWindow => "delete_class_time_window",
            Operation::EmergencyContacts => "emergency_contacts",
            Operation::SetEmergencyContacts => "set_emergency_contacts",
            Operation::ListLocationReportWindows => "list_location_report_windows",
            Operation::AddLocationReportWindow => "add_location_report_window",
            Operation::DeleteLocationReportWindow => "delete_location_report_window",
            Operation::ActivateDevice => "activate_device",
        }
    }
}
