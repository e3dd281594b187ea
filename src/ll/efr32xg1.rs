//! EFR32xG1 MODEM registers
//!
//! Register offsets, reset values and access modes follow revision A2, field
//! layouts revision A3. The two revisions don't differ in this peripheral.
//! The 256 words of modem RAM are described as a single array register.

use super::{access, first_or, impl_register, impl_rw, Revision};

/// Revision described by this module
pub const REVISION: Revision = Revision::Efr32xg1;

/// Address of the MODEM peripheral
pub const BASE_ADDRESS: u32 = 0x4008_6000;

impl_register! {
    0x000, RO, 0x00000000, 0xFFFF00F7, STATUS(status) { /// Demodulator status
        DEMODSTATE(demodstate),      0,  2, u8; /// Demodulator state
        FRAMEDETID(framedetid),      4,  4, u8;
        ANTSEL(antsel),              5,  5, u8;
        TIMSEQINV(timseqinv),        6,  6, u8;
        TIMLOSTCAUSE(timlostcause),  7,  7, u8;
        CORR(corr),                 16, 23, u8;
        WEAKSYMBOLS(weaksymbols),   24, 31, u8;
    }
    0x004, RO, 0x00000000, 0x1F0FFFFF, TIMDETSTATUS(timdetstatus) { /// Timing detection status
        TIMDETCORR(timdetcorr),              0,  7, u8;
        TIMDETFREQOFFEST(timdetfreqoffest),  8, 15, u8;
        TIMDETPREERRORS(timdetpreerrors),   16, 19, u8;
        TIMDETPASS(timdetpass),             24, 24, u8;
        TIMDETINDEX(timdetindex),           25, 28, u8;
    }
    0x008, RO, 0x00000000, 0xFFFFFFFF, FREQOFFEST(freqoffest) { /// Frequency offset estimate
        FREQOFFEST(freqoffest),  0,  7, u8;
        POE(poe),                8, 15, u8;
        CORRVAL(corrval),       16, 23, u8;
        SOFTVAL(softval),       24, 31, u8;
    }
    0x00C, RO, 0x00000000, 0x0007FFFF, AFCADJRX(afcadjrx) { /// AFC adjustment applied in RX
        AFCADJRX(afcadjrx),  0, 18, u32;
    }
    0x010, RO, 0x00000000, 0x0007FFFF, AFCADJTX(afcadjtx) { /// AFC adjustment applied in TX
        AFCADJTX(afcadjtx),  0, 18, u32;
    }
    0x014, RW, 0x00000000, 0x0000001F, MIXCTRL(mixctrl) { /// Analog mixer control
        MODE(mode),                0,  3, u8;
        DIGIQSWAPEN(digiqswapen),  4,  4, u8;
    }
    0x018, RW, 0x00000000, 0xFFFFFBFF, CTRL0(ctrl0) { /// Modem control 0: modulation format, coding and DSSS
        FDM0DIFFDIS(fdm0diffdis),          0,  0, u8;
        MAPFSK(mapfsk),                    1,  3, u8; /// FSK symbol mapping
        CODING(coding),                    4,  5, u8; /// Symbol coding
        MODFORMAT(modformat),              6,  8, u8; /// Modulation format
        DUALCORROPTDIS(dualcorroptdis),    9,  9, u8;
        DSSSLEN(dssslen),                 11, 15, u8; /// DSSS chip sequence length, minus one
        DSSSSHIFTS(dsssshifts),           16, 18, u8; /// Number of DSSS cyclic shifts, encoded
        DSSSDOUBLE(dsssdouble),           19, 20, u8; /// DSSS symbol doubling
        DETDIS(detdis),                   21, 21, u8; /// Detection disable
        DIFFENCMODE(diffencmode),         22, 24, u8; /// Differential encoding mode
        SHAPING(shaping),                 25, 26, u8; /// Shaping filter select
        DEMODRAWDATASEL(demodrawdatasel), 27, 29, u8;
        FRAMEDETDEL(framedetdel),         30, 31, u8;
    }
    0x01C, RW, 0x00000000, 0xFFFFDFFF, CTRL1(ctrl1) { /// Modem control 1: sync word and resynchronization
        SYNCBITS(syncbits),            0,  4, u8; /// Sync word length, minus one
        SYNCERRORS(syncerrors),        5,  8, u8; /// Accepted sync word bit errors
        DUALSYNC(dualsync),            9,  9, u8; /// Dual sync word detection
        TXSYNC(txsync),               10, 10, u8; /// Sync word transmitted
        SYNCDATA(syncdata),           11, 11, u8;
        SYNC1INV(sync1inv),           12, 12, u8;
        COMPMODE(compmode),           14, 15, u8;
        RESYNCPER(resyncper),         16, 19, u8; /// Timing resynchronization period
        PHASEDEMOD(phasedemod),       20, 21, u8; /// Phase demodulator select
        FREQOFFESTPER(freqoffestper), 22, 24, u8;
        FREQOFFESTLIM(freqoffestlim), 25, 31, u8;
    }
    0x020, RW, 0x00001000, 0xFFFFFFFF, CTRL2(ctrl2) { /// Modem control 2: signal quality and baud rate dividers
        SQITHRESH(sqithresh),        0,  7, u8; /// Signal quality threshold
        RXFRCDIS(rxfrcdis),          8,  8, u8;
        RXPINMODE(rxpinmode),        9,  9, u8;
        TXPINMODE(txpinmode),       10, 11, u8;
        DATAFILTER(datafilter),     12, 13, u8;
        BRDIVA(brdiva),             14, 17, u8;
        BRDIVB(brdivb),             18, 21, u8;
        DEVMULA(devmula),           22, 23, u8;
        DEVMULB(devmulb),           24, 25, u8;
        RATESELMODE(rateselmode),   26, 27, u8;
        PRSDEBUG(prsdebug),         28, 28, u8;
        DEVWEIGHTDIS(devweightdis), 29, 29, u8;
        DMASEL(dmasel),             30, 31, u8;
    }
    0x024, RW, 0x00008000, 0xFFFFFF9F, CTRL3(ctrl3) { /// Modem control 3: antenna diversity and timing samples
        PRSDINEN(prsdinen),                0,  0, u8;
        PRSDINSEL(prsdinsel),              1,  4, u8;
        RAMTESTEN(ramtesten),              7,  7, u8;
        ANTDIVMODE(antdivmode),            8, 10, u8;
        ANTDIVREPEATDIS(antdivrepeatdis), 11, 11, u8;
        TSAMPMODE(tsampmode),             12, 13, u8;
        TSAMPDEL(tsampdel),               14, 15, u8;
        TSAMPLIM(tsamplim),               16, 31, u16;
    }
    0x028, RW, 0x00800000, 0xBFFFFFFF, CTRL4(ctrl4) { /// Modem control 4: ISI compensation and predistortion
        ISICOMP(isicomp),                        0,  3, u8; /// ISI compensation
        DEVOFFCOMP(devoffcomp),                  4,  4, u8;
        PREDISTGAIN(predistgain),                5,  9, u8;
        PREDISTDEB(predistdeb),                 10, 12, u8;
        PREDISTAVG(predistavg),                 13, 13, u8;
        PREDISTRST(predistrst),                 14, 14, u8;
        PHASECLICKFILT(phaseclickfilt),         15, 21, u8;
        SOFTDSSSMODE(softdsssmode),             22, 22, u8;
        ADCSATLEVEL(adcsatlevel),               23, 25, u8;
        ADCSATDENS(adcsatdens),                 26, 27, u8;
        OFFSETPHASEMASKING(offsetphasemasking), 28, 28, u8; /// Offset phase masking
        OFFSETPHASESCALING(offsetphasescaling), 29, 29, u8;
        CLKUNDIVREQ(clkundivreq),               31, 31, u8;
    }
    0x02C, RW, 0x00000000, 0x000007FE, CTRL5(ctrl5) { /// Modem control 5: baud rate calibration
        BRCALEN(brcalen),      1,  1, u8; /// Baud rate calibration enable
        BRCALMODE(brcalmode),  2,  3, u8; /// Baud rate calibration mode
        BRCALAVG(brcalavg),    4,  5, u8; /// Baud rate calibration averaging
        DETDEL(detdel),        6,  8, u8;
        TDEDGE(tdedge),        9,  9, u8;
        TREDGE(tredge),       10, 10, u8;
    }
    0x030, RW, 0x00000000, 0x00FFFFFF, TXBR(txbr) { /// TX baud rate
        TXBRNUM(txbrnum),  0, 15, u16; /// TX baud rate numerator
        TXBRDEN(txbrden), 16, 23, u8; /// TX baud rate denominator
    }
    0x034, RW, 0x00000000, 0x00001FFF, RXBR(rxbr) { /// RX baud rate
        RXBRNUM(rxbrnum),  0,  4, u8;
        RXBRDEN(rxbrden),  5,  9, u8;
        RXBRINT(rxbrint), 10, 12, u8;
    }
    0x038, RW, 0x00000000, 0x3FFFFFFF, CF(cf) { /// Channel filter decimation
        DEC0(dec0),                            0,  2, u8; /// Decimation factor 0
        DEC1(dec1),                            3, 16, u16; /// Decimation factor 1
        DEC2(dec2),                           17, 22, u8; /// Decimation factor 2
        CFOSR(cfosr),                         23, 25, u8;
        DEC1GAIN(dec1gain),                   26, 27, u8; /// Additional DEC1 gain
        RESYNCRESETTIMING(resyncresettiming), 28, 28, u8;
        RESYNCBYPASS(resyncbypass),           29, 29, u8;
    }
    0x03C, RW, 0x00000000, 0xFFFF1FFF, PRE(pre) { /// Preamble configuration
        BASE(base),                  0,  3, u8; /// Preamble base pattern, LSB first
        BASEBITS(basebits),          4,  5, u8; /// Preamble base length, minus one
        PRESYMB4FSK(presymb4fsk),    6,  6, u8; /// 4-FSK preamble symbols
        PREERRORS(preerrors),        7, 10, u8; /// Accepted preamble base errors
        DSSSPRE(dssspre),           11, 11, u8; /// Spread preamble
        SYNCSYMB4FSK(syncsymb4fsk), 12, 12, u8;
        TXBASES(txbases),           16, 31, u16; /// Number of preamble bases transmitted
    }
    0x040, RW, 0x00000000, 0xFFFFFFFF, SYNC0(sync0) { /// Sync word 0
        SYNC0(sync0),  0, 31, u32; /// Sync word 0, LSB first
    }
    0x044, RW, 0x00000000, 0xFFFFFFFF, SYNC1(sync1) { /// Sync word 1
        SYNC1(sync1),  0, 31, u32; /// Sync word 1, LSB first
    }
    0x048, RW, 0x00000000, 0xFFFFFFFF, TIMING(timing) { /// Timing detection
        TIMTHRESH(timthresh),      0,  7, u8; /// Timing detection correlation threshold
        TIMINGBASES(timingbases),  8, 11, u8; /// Preamble bases in the timing window
        ADDTIMSEQ(addtimseq),     12, 15, u8; /// Additional timing sequences
        TIMSEQINVEN(timseqinven), 16, 16, u8;
        TIMSEQSYNC(timseqsync),   17, 17, u8;
        FDM0THRESH(fdm0thresh),   18, 20, u8;
        OFFSUBNUM(offsubnum),     21, 24, u8;
        OFFSUBDEN(offsubden),     25, 28, u8;
        TSAGCDEL(tsagcdel),       29, 29, u8;
        FASTRESYNC(fastresync),   30, 31, u8; /// Fast resynchronization
    }
    0x04C, RW, 0x00000000, 0xFFFFFFFF, DSSS0(dsss0) { /// DSSS chip sequence
        DSSS0(dsss0),  0, 31, u32; /// DSSS chip sequence, LSB first
    }
    0x050, RW, 0x00000000, 0x003F03FF, MODINDEX(modindex) { /// Modulation index
        MODINDEXM(modindexm),  0,  4, u8;
        MODINDEXE(modindexe),  5,  9, u8;
        FREQGAINE(freqgaine), 16, 18, u8;
        FREQGAINM(freqgainm), 19, 21, u8;
    }
    0x054, RW, 0x00000000, 0x00FFFCFF, AFC(afc) { /// Automatic frequency control
        AFCSCALEM(afcscalem),  0,  4, u8;
        AFCSCALEE(afcscalee),  5,  7, u8;
        AFCRXMODE(afcrxmode), 10, 12, u8;
        AFCTXMODE(afctxmode), 13, 14, u8;
        AFCRXCLR(afcrxclr),   15, 15, u8;
        AFCDEL(afcdel),       16, 20, u8;
        AFCAVGPER(afcavgper), 21, 23, u8;
    }
    0x058, RW, 0x00000000, 0x0003FFFF, AFCADJLIM(afcadjlim) { /// AFC adjustment limit
        AFCADJLIM(afcadjlim),  0, 17, u32;
    }
    0x05C, RW, 0x22130A04, 0xFFFFFFFF, SHAPING0(shaping0) { /// Shaping filter coefficients 0
        COEFF0(coeff0),  0,  7, u8;
        COEFF1(coeff1),  8, 15, u8;
        COEFF2(coeff2), 16, 23, u8;
        COEFF3(coeff3), 24, 31, u8;
    }
    0x060, RW, 0x4F4A4132, 0xFFFFFFFF, SHAPING1(shaping1) { /// Shaping filter coefficients 1
        COEFF4(coeff4),  0,  7, u8;
        COEFF5(coeff5),  8, 15, u8;
        COEFF6(coeff6), 16, 23, u8;
        COEFF7(coeff7), 24, 31, u8;
    }
    0x064, RW, 0x00000000, 0x000000FF, SHAPING2(shaping2) { /// Shaping filter coefficients 2
        COEFF8(coeff8),  0,  7, u8;
    }
    0x068, RW, 0x00000555, 0xFF800FFF, RAMPCTRL(rampctrl) { /// PA ramping control
        RAMPRATE0(ramprate0),  0,  3, u8;
        RAMPRATE1(ramprate1),  4,  7, u8;
        RAMPRATE2(ramprate2),  8, 11, u8;
        RAMPDIS(rampdis),     23, 23, u8;
        RAMPVAL(rampval),     24, 31, u8;
    }
    0x06C, RW, 0x00FFFFFF, 0x00FFFFFF, RAMPLEV(ramplev) { /// PA ramping levels
        RAMPLEV0(ramplev0),  0,  7, u8;
        RAMPLEV1(ramplev1),  8, 15, u8;
        RAMPLEV2(ramplev2), 16, 23, u8;
    }
    0x070, RW, 0x00000000, 0x0000001F, ROUTEPEN(routepen) { /// I/O routing pin enable
        DINPEN(dinpen),    0,  0, u8;
        DOUTPEN(doutpen),  1,  1, u8;
        DCLKPEN(dclkpen),  2,  2, u8;
        ANT0PEN(ant0pen),  3,  3, u8;
        ANT1PEN(ant1pen),  4,  4, u8;
    }
    0x074, RW, 0x00000000, 0x003F3F3F, ROUTELOC0(routeloc0) { /// I/O routing location 0
        DINLOC(dinloc),    0,  5, u8;
        DOUTLOC(doutloc),  8, 13, u8;
        DCLKLOC(dclkloc), 16, 21, u8;
    }
    0x078, RW, 0x00000000, 0x00003F3F, ROUTELOC1(routeloc1) { /// I/O routing location 1
        ANT0LOC(ant0loc),  0,  5, u8;
        ANT1LOC(ant1loc),  8, 13, u8;
    }
    0x080, RO, 0x00000000, 0x0000FF07, IF(r#if) { /// Interrupt flags
        TXFRAMESENT(txframesent),    0,  0, u8;
        TXSYNCSENT(txsyncsent),      1,  1, u8;
        TXPRESENT(txpresent),        2,  2, u8;
        RXTIMDET(rxtimdet),          8,  8, u8;
        RXPREDET(rxpredet),          9,  9, u8;
        RXFRAMEDET0(rxframedet0),   10, 10, u8;
        RXFRAMEDET1(rxframedet1),   11, 11, u8;
        RXTIMLOST(rxtimlost),       12, 12, u8;
        RXPRELOST(rxprelost),       13, 13, u8;
        RXFRAMEDETOF(rxframedetof), 14, 14, u8;
        RXTIMNF(rxtimnf),           15, 15, u8;
    }
    0x084, WO, 0x00000000, 0x0000FF07, IFS(ifs) { /// Interrupt flag set
        TXFRAMESENT(txframesent),    0,  0, u8;
        TXSYNCSENT(txsyncsent),      1,  1, u8;
        TXPRESENT(txpresent),        2,  2, u8;
        RXTIMDET(rxtimdet),          8,  8, u8;
        RXPREDET(rxpredet),          9,  9, u8;
        RXFRAMEDET0(rxframedet0),   10, 10, u8;
        RXFRAMEDET1(rxframedet1),   11, 11, u8;
        RXTIMLOST(rxtimlost),       12, 12, u8;
        RXPRELOST(rxprelost),       13, 13, u8;
        RXFRAMEDETOF(rxframedetof), 14, 14, u8;
        RXTIMNF(rxtimnf),           15, 15, u8;
    }
    0x088, WO, 0x00000000, 0x0000FF07, IFC(ifc) { /// Interrupt flag clear
        TXFRAMESENT(txframesent),    0,  0, u8;
        TXSYNCSENT(txsyncsent),      1,  1, u8;
        TXPRESENT(txpresent),        2,  2, u8;
        RXTIMDET(rxtimdet),          8,  8, u8;
        RXPREDET(rxpredet),          9,  9, u8;
        RXFRAMEDET0(rxframedet0),   10, 10, u8;
        RXFRAMEDET1(rxframedet1),   11, 11, u8;
        RXTIMLOST(rxtimlost),       12, 12, u8;
        RXPRELOST(rxprelost),       13, 13, u8;
        RXFRAMEDETOF(rxframedetof), 14, 14, u8;
        RXTIMNF(rxtimnf),           15, 15, u8;
    }
    0x08C, RW, 0x00000000, 0x0000FF07, IEN(ien) { /// Interrupt enable
        TXFRAMESENT(txframesent),    0,  0, u8;
        TXSYNCSENT(txsyncsent),      1,  1, u8;
        TXPRESENT(txpresent),        2,  2, u8;
        RXTIMDET(rxtimdet),          8,  8, u8;
        RXPREDET(rxpredet),          9,  9, u8;
        RXFRAMEDET0(rxframedet0),   10, 10, u8;
        RXFRAMEDET1(rxframedet1),   11, 11, u8;
        RXTIMLOST(rxtimlost),       12, 12, u8;
        RXPRELOST(rxprelost),       13, 13, u8;
        RXFRAMEDETOF(rxframedetof), 14, 14, u8;
        RXTIMNF(rxtimnf),           15, 15, u8;
    }
    0x090, WO, 0x00000000, 0x00000039, CMD(cmd) { /// Command
        PRESTOP(prestop),        0,  0, u8;
        AFCTXLOCK(afctxlock),    3,  3, u8;
        AFCTXCLEAR(afctxclear),  4,  4, u8;
        AFCRXCLEAR(afcrxclear),  5,  5, u8;
    }
    0x098, RW, 0x00000030, 0x000001FF, DCCOMP(dccomp) { /// DC offset compensation filter
        DCESTIEN(dcestien),          0,  0, u8;
        DCCOMPEN(dccompen),          1,  1, u8;
        DCRSTEN(dcrsten),            2,  2, u8;
        DCCOMPFREEZE(dccompfreeze),  3,  3, u8;
        DCCOMPGEAR(dccompgear),      4,  6, u8;
        DCLIMIT(dclimit),            7,  8, u8;
    }
    0x09C, RW, 0x00000000, 0x7FFFFFFF, DCCOMPFILTINIT(dccompfiltinit) { /// DC offset compensation filter initial value
        DCCOMPINITVALI(dccompinitvali),  0, 14, u16;
        DCCOMPINITVALQ(dccompinitvalq), 15, 29, u16;
        DCCOMPINIT(dccompinit),         30, 30, u8;
    }
    0x100, RO, 0x00000000, 0x3FFFFFFF, DCESTI(dcesti) { /// DC offset estimate
        DCCOMPESTIVALI(dccompestivali),  0, 14, u16;
        DCCOMPESTIVALQ(dccompestivalq), 15, 29, u16;
    }
    0x400, RW, 0x00000000, 0x000000FF, RAM_RAMDATA(ram_ramdata)[256; 4] { /// Modem RAM data
        DATA(data),  0,  7, u8;
    }
}
